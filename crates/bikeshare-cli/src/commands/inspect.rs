//! Inspect command - file metadata and date bounds.

use std::path::PathBuf;

use bikeshare::DashboardConfig;
use colored::Colorize;

use super::load_dataset;

pub fn run(
    file: PathBuf,
    json_output: bool,
    config: DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dashboard, dataset, source) = load_dataset(&file, config)?;
    let bounds = dataset.bounds()?;
    let config = dashboard.config();

    if json_output {
        let output = serde_json::json!({
            "source": source,
            "bounds": bounds,
            "records": dataset.len(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Source".cyan().bold(), source.file.white().bold());
    println!("  Path:    {}", source.path.display());
    println!("  Format:  {}", source.format);
    println!("  Size:    {} bytes", source.size_bytes);
    println!("  Hash:    {}", source.hash.dimmed());
    println!("  Columns: {}", source.columns.join(", "));
    println!("  Rows:    {}", source.row_count);
    println!(
        "  Totals:  {}",
        if config.strict_totals { "strict" } else { "lenient" }
    );
    println!("  Rounding: {:?}", config.rounding);
    println!();
    println!(
        "  {} records from {} to {}",
        dataset.len().to_string().white().bold(),
        bounds.min_date,
        bounds.max_date
    );

    Ok(())
}

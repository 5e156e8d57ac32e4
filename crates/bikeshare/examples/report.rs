//! Example: print a dashboard report for a day-level rental file.
//!
//! Usage:
//!   cargo run --example report -- <file_path> [start] [end]
//!
//! Example:
//!   cargo run --example report -- day_data.csv 2011-06-01 2011-08-31

use std::env;
use std::path::Path;

use bikeshare::{Dashboard, RangeSelection, RentalCategory, ViewStatus};

fn main() -> bikeshare::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: cargo run --example report -- <file_path> [start] [end]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example report -- day_data.csv 2011-06-01 2011-08-31");
        std::process::exit(1);
    }

    let file_path = &args[1];
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Error: File not found: {}", file_path);
        std::process::exit(1);
    }

    let dashboard = Dashboard::new();
    let (dataset, source) = dashboard.load(path)?;
    let selection = RangeSelection::from_parts(
        args.get(2).map(String::as_str),
        args.get(3).map(String::as_str),
    );
    let report = dashboard.report(&dataset, selection)?;

    let separator = "=".repeat(60);
    println!("{}", separator);
    println!("Bike Sharing Dashboard: {}", source.file);
    println!("{}", separator);
    println!();

    println!("## Range {}", report.range);
    match report.status {
        ViewStatus::NoData => println!("  No data in the selected range."),
        ViewStatus::Data => {
            println!("  Total rentals: {}", report.summary.total_rentals);
            if let Some(avg) = report.summary.average_daily_rentals {
                println!("  Average daily rentals: {:.2}", avg);
            }
            println!("  Days: {}", report.summary.days);
        }
    }
    println!();

    println!("## Rentals by season");
    for (season, total) in &report.seasons {
        println!("  {:8} {}", season, total);
    }
    println!();

    println!("## Casual vs registered by weekday");
    for day in &report.weekdays {
        println!("  {:10} {:>8} {:>8}", day.label, day.casual, day.registered);
    }
    println!();

    println!("## Rider split");
    println!(
        "  Casual {} ({:.1}%), registered {} ({:.1}%)",
        report.riders.casual,
        report.riders.casual_share.unwrap_or(0.0),
        report.riders.registered,
        report.riders.registered_share.unwrap_or(0.0)
    );
    println!();

    println!("## Rental volume");
    for category in RentalCategory::ALL {
        println!("  {:10} {}", category.label(), report.buckets.get(category));
    }
    println!("  {:10} {}", "Unclassified", report.buckets.unclassified);
    println!();

    println!("## Weather");
    println!("  Temperature correlation: {:?}", report.temperature.correlation);
    println!("  Wind speed correlation:  {:?}", report.wind_speed.correlation);
    println!();

    println!("{}", separator);

    Ok(())
}

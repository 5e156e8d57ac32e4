//! Breakdown command - full-dataset groupings.

use std::collections::BTreeMap;
use std::path::PathBuf;

use bikeshare::{
    BucketCounts, DashboardConfig, RangeSelection, RentalCategory, RiderSplit, Season,
    WeekdayTotals,
};
use colored::Colorize;
use serde::Serialize;

use super::load_dataset;

#[derive(Serialize)]
struct BreakdownOutput<'a> {
    seasons: &'a BTreeMap<Season, u128>,
    weekdays: &'a [WeekdayTotals],
    riders: &'a RiderSplit,
    buckets: &'a BucketCounts,
    correlation: Correlation,
}

#[derive(Serialize)]
struct Correlation {
    temperature: Option<f64>,
    wind_speed: Option<f64>,
}

pub fn run(
    file: PathBuf,
    json_output: bool,
    config: DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dashboard, dataset, source) = load_dataset(&file, config)?;
    let report = dashboard.report(&dataset, RangeSelection::Empty)?;

    if json_output {
        let output = BreakdownOutput {
            seasons: &report.seasons,
            weekdays: &report.weekdays,
            riders: &report.riders,
            buckets: &report.buckets,
            correlation: Correlation {
                temperature: report.temperature.correlation,
                wind_speed: report.wind_speed.correlation,
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", "Breakdown of".cyan().bold(), source.file.white());
    println!();

    println!("{}", "Rentals by season".cyan().bold());
    for season in Season::ALL {
        let total = report.seasons.get(&season).copied().unwrap_or(0);
        println!("  {:<8} {:>10}", season.label(), total);
    }
    println!();

    println!("{}", "Riders by weekday".cyan().bold());
    println!("  {:<10} {:>10} {:>12}", "", "casual", "registered");
    for day in &report.weekdays {
        println!("  {:<10} {:>10} {:>12}", day.label, day.casual, day.registered);
    }
    println!();

    let riders = &report.riders;
    let share = |s: Option<f64>| s.map(|v| format!("{v:.1}%")).unwrap_or_else(|| "-".into());
    println!("{}", "Casual vs registered".cyan().bold());
    println!("  Casual:     {:>10} ({})", riders.casual, share(riders.casual_share));
    println!(
        "  Registered: {:>10} ({})",
        riders.registered,
        share(riders.registered_share)
    );
    println!();

    println!("{}", "Days by rental volume".cyan().bold());
    for category in RentalCategory::ALL {
        let (low, high) = category.edges();
        println!(
            "  {:<10} ({:>4}, {:>4}]  {:>5}",
            category.label(),
            low,
            high,
            report.buckets.get(category)
        );
    }
    if report.buckets.unclassified > 0 {
        println!(
            "  {} {} day(s) outside every bin",
            "Note:".yellow(),
            report.buckets.unclassified
        );
    }

    Ok(())
}

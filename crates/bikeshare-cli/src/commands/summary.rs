//! Summary command - metrics for a selected date range.

use std::path::PathBuf;

use bikeshare::{
    Bounds, DashboardConfig, DateRange, RangeSelection, RangeSummary, Summary, TrendPoint,
    ViewStatus,
};
use colored::Colorize;
use serde::Serialize;

use super::load_dataset;

#[derive(Serialize)]
struct SummaryOutput<'a> {
    bounds: Bounds,
    selection: &'a RangeSelection,
    range: DateRange,
    status: ViewStatus,
    summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    trend: Option<&'a [TrendPoint]>,
}

impl<'a> SummaryOutput<'a> {
    fn new(ranged: &'a RangeSummary, trend: bool) -> Self {
        Self {
            bounds: ranged.bounds,
            selection: &ranged.selection,
            range: ranged.range,
            status: ranged.status,
            summary: ranged.summary,
            trend: trend.then_some(ranged.trend.as_slice()),
        }
    }
}

pub fn run(
    file: PathBuf,
    start: Option<String>,
    end: Option<String>,
    trend: bool,
    json_output: bool,
    config: DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dashboard, dataset, _source) = load_dataset(&file, config)?;

    let selection = RangeSelection::from_parts(start.as_deref(), end.as_deref());
    let ranged = dashboard.summarize_range(&dataset, selection)?;

    if json_output {
        let output = SummaryOutput::new(&ranged, trend);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Rental summary for".cyan().bold(),
        ranged.range.to_string().white()
    );
    println!(
        "  Data spans {} to {}",
        ranged.bounds.min_date, ranged.bounds.max_date
    );
    if let RangeSelection::Malformed(raw) = &ranged.selection {
        println!(
            "  {} could not read {:?}, showing the full range",
            "Note:".yellow(),
            raw
        );
    }
    println!();

    if ranged.status == ViewStatus::NoData {
        println!("{}", "No data for this range.".yellow());
        return Ok(());
    }

    println!(
        "  Total rentals:         {}",
        ranged.summary.total_rentals.to_string().white().bold()
    );
    if let Some(average) = ranged.summary.average_daily_rentals {
        println!("  Average daily rentals: {}", format!("{average:.2}").white().bold());
    }
    println!("  Days:                  {}", ranged.summary.days);

    if trend {
        println!();
        println!("{}", "Daily trend".cyan().bold());
        for point in &ranged.trend {
            println!("  {}  {:>6}", point.date, point.total);
        }
    }

    Ok(())
}

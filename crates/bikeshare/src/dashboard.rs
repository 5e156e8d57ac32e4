//! Dashboard engine and public API.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use crate::config::DashboardConfig;
use crate::dataset::{Bounds, Dataset, RecordLoader, Season};
use crate::error::Result;
use crate::input::{Parser, SourceMetadata};
use crate::pipeline::{
    BucketCounts, DateRange, FilteredView, Measure, RangeSelection, RiderSplit, ScatterSeries,
    Summary, TrendPoint, WeekdayTotals, aggregate_by_season, aggregate_by_weekday, bucketize,
    daily_trend, resolve_range, scatter, split_casual_registered, summarize_with,
};

/// Whether a filtered view has anything to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewStatus {
    Data,
    /// The range is valid but no record falls inside it.
    NoData,
}

impl ViewStatus {
    pub fn of(view: &FilteredView<'_>) -> Self {
        if view.is_empty() {
            ViewStatus::NoData
        } else {
            ViewStatus::Data
        }
    }
}

/// Metrics for the selected date range.
#[derive(Debug, Clone, Serialize)]
pub struct RangeSummary {
    pub bounds: Bounds,
    pub selection: RangeSelection,
    pub range: DateRange,
    pub status: ViewStatus,
    pub summary: Summary,
    pub trend: Vec<TrendPoint>,
}

/// Everything the dashboard shows for one selection.
///
/// `range`, `status`, `summary`, and `trend` reflect the selected range;
/// the remaining sections always cover the full dataset.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub bounds: Bounds,
    pub selection: RangeSelection,
    pub range: DateRange,
    pub status: ViewStatus,
    pub summary: Summary,
    pub trend: Vec<TrendPoint>,
    pub seasons: BTreeMap<Season, u128>,
    pub weekdays: Vec<WeekdayTotals>,
    pub riders: RiderSplit,
    pub buckets: BucketCounts,
    pub temperature: ScatterSeries,
    pub wind_speed: ScatterSeries,
}

/// Loads rental datasets and computes dashboard reports.
pub struct Dashboard {
    config: DashboardConfig,
    parser: Parser,
}

impl Dashboard {
    /// Create a dashboard with default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    pub fn with_config(config: DashboardConfig) -> Self {
        let parser = Parser::with_config(config.parser_config());
        Self { config, parser }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Read and decode a data file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(Dataset, SourceMetadata)> {
        let (table, source) = self.parser.parse_file(path.as_ref())?;
        let dataset = RecordLoader::new(&self.config).load_table(&table)?;

        if let Ok(bounds) = dataset.bounds() {
            info!(
                records = dataset.len(),
                min_date = %bounds.min_date,
                max_date = %bounds.max_date,
                "loaded rental dataset"
            );
        }

        Ok((dataset, source))
    }

    /// Decode an in-memory delimited table.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Dataset> {
        let table = self.parser.parse_bytes(bytes)?;
        RecordLoader::new(&self.config).load_table(&table)
    }

    /// Resolve `selection`, filter, and summarize the selected range.
    pub fn summarize_range(
        &self,
        dataset: &Dataset,
        selection: RangeSelection,
    ) -> Result<RangeSummary> {
        let bounds = dataset.bounds()?;
        let range = resolve_range(&selection, bounds);
        let view = dataset.filter(&range);

        Ok(RangeSummary {
            bounds,
            selection,
            range,
            status: ViewStatus::of(&view),
            summary: summarize_with(view.records(), self.config.rounding),
            trend: daily_trend(view.records()),
        })
    }

    /// Compute the full report for a selection.
    #[instrument(skip(self, dataset), fields(records = dataset.len()))]
    pub fn report(&self, dataset: &Dataset, selection: RangeSelection) -> Result<DashboardReport> {
        let weekdays = aggregate_by_weekday(dataset.records())?;
        let ranged = self.summarize_range(dataset, selection)?;
        let all = dataset.records();

        Ok(DashboardReport {
            bounds: ranged.bounds,
            selection: ranged.selection,
            range: ranged.range,
            status: ranged.status,
            summary: ranged.summary,
            trend: ranged.trend,
            seasons: aggregate_by_season(all),
            weekdays,
            riders: split_casual_registered(all),
            buckets: bucketize(all),
            temperature: scatter(all, Measure::Temperature),
            wind_speed: scatter(all, Measure::WindSpeed),
        })
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

//! Bikeshare: date-range filtering and aggregation for daily bike-rental data.
//!
//! A dataset is loaded once from a delimited file and never mutated. Each
//! date-range selection is resolved against the dataset's bounds, filtered,
//! and summarized from scratch; the results are plain serializable values for
//! whatever presentation layer draws them.
//!
//! # Example
//!
//! ```no_run
//! use bikeshare::{Dashboard, RangeSelection};
//!
//! let dashboard = Dashboard::new();
//! let (dataset, _source) = dashboard.load("day_data.csv").unwrap();
//!
//! let selection = RangeSelection::from_parts(Some("2011-06-01"), Some("2011-08-31"));
//! let report = dashboard.report(&dataset, selection).unwrap();
//!
//! println!("Total rentals: {}", report.summary.total_rentals);
//! println!("Average per day: {:?}", report.summary.average_daily_rentals);
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod pipeline;

mod dashboard;

pub use crate::dashboard::{Dashboard, DashboardReport, RangeSummary, ViewStatus};
pub use config::{ColumnMapping, DashboardConfig};
pub use dataset::{Bounds, Dataset, RentalRecord, Season};
pub use error::{BikeshareError, Result};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use pipeline::{
    BucketCounts, DateRange, FilteredView, Measure, RangeSelection, RentalCategory, RiderSplit,
    Rounding, ScatterSeries, Summary, TrendPoint, WeekdayTotals, aggregate_by_season,
    aggregate_by_weekday, bucketize, daily_trend, filter, resolve_range, scatter,
    split_casual_registered, summarize, summarize_with,
};

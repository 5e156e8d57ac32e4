//! The filtering and aggregation pipeline.
//!
//! Every operation here is a pure function of an immutable [`Dataset`] or a
//! [`FilteredView`] borrowed from one. Nothing is cached between calls.
//!
//! [`Dataset`]: crate::Dataset

mod aggregate;
mod buckets;
mod range;
mod series;
mod summary;
mod view;

pub use aggregate::{
    RiderSplit, WeekdayTotals, aggregate_by_season, aggregate_by_weekday, split_casual_registered,
};
pub use buckets::{BucketCounts, RentalCategory, bucketize};
pub use range::{DateRange, RangeSelection, resolve_range};
pub use series::{Measure, ScatterPoint, ScatterSeries, TrendPoint, daily_trend, scatter};
pub use summary::{Rounding, Summary, summarize, summarize_with};
pub use view::{FilteredView, filter};

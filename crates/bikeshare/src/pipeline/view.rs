//! Date-filtered views over a dataset.

use serde::Serialize;
use tracing::debug;

use super::range::DateRange;
use crate::dataset::{Dataset, RentalRecord};

/// The records of a dataset that fall inside a date range.
///
/// Borrows a contiguous slice of the dataset, so records keep their
/// chronological order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FilteredView<'a> {
    range: DateRange,
    records: &'a [RentalRecord],
}

impl<'a> FilteredView<'a> {
    /// Select from date-sorted records.
    pub(crate) fn select(sorted: &'a [RentalRecord], range: DateRange) -> Self {
        let lo = sorted.partition_point(|r| r.date < range.start());
        let hi = sorted.partition_point(|r| r.date <= range.end());
        let records = &sorted[lo..hi.max(lo)];

        debug!(range = %range, records = records.len(), "filtered records");
        Self { range, records }
    }

    /// Narrow this view further. Filtering by the same range again returns
    /// the same records.
    pub fn filter(&self, range: &DateRange) -> FilteredView<'a> {
        Self::select(self.records, *range)
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn records(&self) -> &'a [RentalRecord] {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record falls in the range.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a RentalRecord> {
        self.records.iter()
    }
}

/// Records of `dataset` with `range.start <= date <= range.end`.
pub fn filter<'a>(dataset: &'a Dataset, range: &DateRange) -> FilteredView<'a> {
    dataset.filter(range)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::dataset::Season;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn dataset(days: &[u32]) -> Dataset {
        let records = days
            .iter()
            .map(|&d| RentalRecord {
                date: date(d),
                season: Season::Winter,
                weekday: 0,
                temperature: 0.2,
                wind_speed: 0.3,
                casual: 0,
                registered: u64::from(d) * 100,
                total: u64::from(d) * 100,
            })
            .collect();
        Dataset::from_records(records).unwrap()
    }

    #[test]
    fn test_filter_inclusive_both_ends() {
        let data = dataset(&[1, 2, 3]);
        let range = DateRange::new(date(2), date(3)).unwrap();
        let view = filter(&data, &range);

        let totals: Vec<u64> = view.iter().map(|r| r.total).collect();
        assert_eq!(totals, vec![200, 300]);
        assert_eq!(view.range(), range);
    }

    #[test]
    fn test_single_day_range() {
        let data = dataset(&[1, 2, 3]);
        let view = data.filter(&DateRange::new(date(2), date(2)).unwrap());
        assert_eq!(view.len(), 1);
        assert_eq!(view.records()[0].date, date(2));
    }

    #[test]
    fn test_gap_yields_empty_view() {
        let data = dataset(&[1, 5]);
        let view = data.filter(&DateRange::new(date(2), date(4)).unwrap());
        assert!(view.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let data = dataset(&[1, 2, 3, 4, 5, 6]);
        let range = DateRange::new(date(2), date(4)).unwrap();
        let once = data.filter(&range);
        let twice = once.filter(&range);
        assert_eq!(once.records(), twice.records());
    }

    #[test]
    fn test_narrowing_a_view() {
        let data = dataset(&[1, 2, 3, 4, 5, 6]);
        let wide = data.filter(&DateRange::new(date(2), date(5)).unwrap());
        let narrow = wide.filter(&DateRange::new(date(1), date(3)).unwrap());
        let days: Vec<NaiveDate> = narrow.iter().map(|r| r.date).collect();
        assert_eq!(days, vec![date(2), date(3)]);
    }
}

//! The immutable, date-ordered dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::RentalRecord;
use crate::error::{BikeshareError, Result};
use crate::pipeline::{DateRange, FilteredView};

/// First and last date covered by a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl Bounds {
    /// Whether `date` falls within the bounds, inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min_date <= date && date <= self.max_date
    }

    /// Clamp a date into the bounds.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min_date, self.max_date)
    }

    /// The range covering every date in the bounds.
    pub fn full_range(&self) -> DateRange {
        DateRange::from_bounds(*self)
    }
}

/// Records sorted ascending by date, with unique dates.
///
/// A `Dataset` is never mutated after construction; filtering borrows
/// subslices of it.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    records: Vec<RentalRecord>,
}

impl Dataset {
    /// Build a dataset from records in any order.
    ///
    /// Records are sorted by date. Two records with the same date are
    /// rejected; `first_row`/`second_row` in the error are 1-based positions
    /// in `records`.
    pub fn from_records(records: Vec<RentalRecord>) -> Result<Self> {
        let mut indexed: Vec<(usize, RentalRecord)> = records.into_iter().enumerate().collect();
        indexed.sort_by_key(|(_, r)| r.date);

        if let Some(pair) = indexed.windows(2).find(|w| w[0].1.date == w[1].1.date) {
            let (a, b) = (pair[0].0 + 1, pair[1].0 + 1);
            return Err(BikeshareError::DuplicateDate {
                date: pair[0].1.date,
                first_row: a.min(b),
                second_row: a.max(b),
            });
        }

        Ok(Self {
            records: indexed.into_iter().map(|(_, r)| r).collect(),
        })
    }

    /// All records in chronological order.
    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RentalRecord> {
        self.records.iter()
    }

    /// First and last record dates.
    pub fn bounds(&self) -> Result<Bounds> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Ok(Bounds {
                min_date: first.date,
                max_date: last.date,
            }),
            _ => Err(BikeshareError::EmptyDataset),
        }
    }

    /// Records with `range.start <= date <= range.end`.
    pub fn filter(&self, range: &DateRange) -> FilteredView<'_> {
        FilteredView::select(&self.records, *range)
    }
}

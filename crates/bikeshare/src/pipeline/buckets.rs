//! Rental-volume categories.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dataset::RentalRecord;

/// Width of each category's bin, in rentals per day.
pub const BIN_WIDTH: u64 = 1800;

/// Five-level bucket of a day's total rentals.
///
/// Bins are left-open and right-closed: (0, 1800], (1800, 3600], ...,
/// (7200, 9000]. Zero and anything above 9000 belong to no category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalCategory {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RentalCategory {
    pub const ALL: [RentalCategory; 5] = [
        RentalCategory::VeryLow,
        RentalCategory::Low,
        RentalCategory::Medium,
        RentalCategory::High,
        RentalCategory::VeryHigh,
    ];

    /// The category whose bin contains `total`, if any.
    pub fn classify(total: u64) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let index = (total - 1) / BIN_WIDTH;
        usize::try_from(index).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    /// Exclusive lower and inclusive upper edge of the bin.
    pub fn edges(&self) -> (u64, u64) {
        let i = *self as u64;
        (i * BIN_WIDTH, (i + 1) * BIN_WIDTH)
    }

    pub fn label(&self) -> &'static str {
        match self {
            RentalCategory::VeryLow => "Very Low",
            RentalCategory::Low => "Low",
            RentalCategory::Medium => "Medium",
            RentalCategory::High => "High",
            RentalCategory::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for RentalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Record counts per category, with out-of-bin records counted separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BucketCounts {
    /// Every category is present, possibly with a zero count.
    pub counts: BTreeMap<RentalCategory, usize>,
    /// Records whose total is zero or above the last bin.
    pub unclassified: usize,
}

impl BucketCounts {
    pub fn get(&self, category: RentalCategory) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// All records seen, classified or not.
    pub fn total(&self) -> usize {
        self.counts.values().sum::<usize>() + self.unclassified
    }
}

/// Count records per rental category.
pub fn bucketize(records: &[RentalRecord]) -> BucketCounts {
    let mut counts: BTreeMap<RentalCategory, usize> =
        RentalCategory::ALL.iter().map(|c| (*c, 0)).collect();
    let mut unclassified = 0;

    for record in records {
        match RentalCategory::classify(record.total) {
            Some(category) => *counts.entry(category).or_insert(0) += 1,
            None => unclassified += 1,
        }
    }

    BucketCounts {
        counts,
        unclassified,
    }
}

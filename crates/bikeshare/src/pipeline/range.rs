//! Date-range selection and resolution.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::dataset::{Bounds, parse_date};

/// A raw date-range selection as delivered by a UI control, query string, or
/// command line. It may be incomplete or unparseable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RangeSelection {
    /// Two endpoints, in either order.
    Pair(NaiveDate, NaiveDate),
    /// Only one endpoint was chosen.
    Single(NaiveDate),
    /// Nothing was chosen.
    Empty,
    /// The input could not be interpreted.
    Malformed(String),
}

impl RangeSelection {
    /// Classify optional start/end strings. Blank strings count as absent.
    pub fn from_parts(start: Option<&str>, end: Option<&str>) -> Self {
        let start = start.map(str::trim).filter(|s| !s.is_empty());
        let end = end.map(str::trim).filter(|s| !s.is_empty());

        match (start, end) {
            (None, None) => RangeSelection::Empty,
            (Some(raw), None) | (None, Some(raw)) => match parse_date(raw) {
                Some(date) => RangeSelection::Single(date),
                None => RangeSelection::Malformed(raw.to_string()),
            },
            (Some(a), Some(b)) => match (parse_date(a), parse_date(b)) {
                (Some(a), Some(b)) => RangeSelection::Pair(a, b),
                _ => RangeSelection::Malformed(format!("{}..{}", a, b)),
            },
        }
    }

    /// Classify the value list of a date picker: two values form a pair, one
    /// is a single date, anything else is empty or malformed.
    pub fn from_values(values: &[NaiveDate]) -> Self {
        match values {
            [] => RangeSelection::Empty,
            [date] => RangeSelection::Single(*date),
            [a, b] => RangeSelection::Pair(*a, *b),
            _ => RangeSelection::Malformed(format!("{} values", values.len())),
        }
    }
}

/// An inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Returns `None` when `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// The range spanning the whole of `bounds`.
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self {
            start: bounds.min_date,
            end: bounds.max_date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Turn any selection into a valid range inside `bounds`.
///
/// Pairs are put in order and clamped into the bounds; a pair lying entirely
/// on one side of the bounds collapses onto the nearest boundary date.
/// Single, empty, and malformed selections fall back to the full range.
pub fn resolve_range(selection: &RangeSelection, bounds: Bounds) -> DateRange {
    match selection {
        RangeSelection::Pair(a, b) => {
            let (lo, hi) = if a <= b { (*a, *b) } else { (*b, *a) };
            DateRange {
                start: bounds.clamp(lo),
                end: bounds.clamp(hi),
            }
        }
        other => {
            debug!(selection = ?other, "using full date range");
            bounds.full_range()
        }
    }
}

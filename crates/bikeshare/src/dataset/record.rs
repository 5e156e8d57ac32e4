//! A single day of rentals.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar season of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Numeric code used by the day-level dataset (1 = spring .. 4 = winter).
    pub fn code(&self) -> u8 {
        match self {
            Season::Spring => 1,
            Season::Summer => 2,
            Season::Fall => 3,
            Season::Winter => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "spring" => Ok(Season::Spring),
            "2" | "summer" => Ok(Season::Summer),
            "3" | "fall" | "autumn" => Ok(Season::Fall),
            "4" | "winter" => Ok(Season::Winter),
            other => Err(format!(
                "Unknown season: '{}'. Use 1-4 or spring, summer, fall, winter.",
                other
            )),
        }
    }
}

/// One row of the dataset: rentals for a single day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRecord {
    /// Calendar date; unique within a dataset.
    pub date: NaiveDate,
    pub season: Season,
    /// Day-of-week code, 0 = Monday .. 6 = Sunday. Stored as read.
    pub weekday: u8,
    /// Normalized temperature.
    pub temperature: f64,
    /// Normalized wind speed.
    pub wind_speed: f64,
    /// Casual (unregistered) riders.
    pub casual: u64,
    /// Registered riders.
    pub registered: u64,
    /// Total rentals, expected to equal `casual + registered`.
    pub total: u64,
}

impl RentalRecord {
    /// Calendar year of the record.
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Whether `total == casual + registered`.
    pub fn is_consistent(&self) -> bool {
        self.casual.checked_add(self.registered) == Some(self.total)
    }
}

//! Group-by aggregations over the full dataset.
//!
//! Sums are accumulated in `u128`. Every input is a `u64` and a dataset holds
//! far fewer than 2^63 records, so the sums cannot overflow.

use std::collections::BTreeMap;

use chrono::Weekday;
use serde::Serialize;

use super::summary::{Rounding, round_ratio};
use crate::dataset::{RentalRecord, Season};
use crate::error::{BikeshareError, Result};

/// Total rentals per season. Seasons with no records are absent.
pub fn aggregate_by_season(records: &[RentalRecord]) -> BTreeMap<Season, u128> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals.entry(record.season).or_insert(0) += u128::from(record.total);
    }
    totals
}

/// Casual and registered rentals for one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayTotals {
    pub weekday: Weekday,
    pub label: &'static str,
    pub casual: u128,
    pub registered: u128,
}

impl WeekdayTotals {
    pub fn total(&self) -> u128 {
        self.casual + self.registered
    }
}

fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Casual and registered sums per weekday code, Monday (0) through Sunday (6).
///
/// Always returns seven entries; days with no records report zeros. A code
/// outside 0-6 is an error.
pub fn aggregate_by_weekday(records: &[RentalRecord]) -> Result<Vec<WeekdayTotals>> {
    let mut sums = [(0u128, 0u128); 7];

    for record in records {
        let slot = sums
            .get_mut(usize::from(record.weekday))
            .ok_or(BikeshareError::InvalidWeekday {
                date: record.date,
                value: record.weekday,
            })?;
        slot.0 += u128::from(record.casual);
        slot.1 += u128::from(record.registered);
    }

    let mut weekday = Weekday::Mon;
    let mut out = Vec::with_capacity(7);
    for (casual, registered) in sums {
        out.push(WeekdayTotals {
            weekday,
            label: weekday_label(weekday),
            casual,
            registered,
        });
        weekday = weekday.succ();
    }
    Ok(out)
}

/// Overall casual vs registered rentals with percentage shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiderSplit {
    pub casual: u128,
    pub registered: u128,
    /// Casual share of all riders in percent, 1 decimal.
    pub casual_share: Option<f64>,
    /// Registered share of all riders in percent, 1 decimal.
    pub registered_share: Option<f64>,
}

impl RiderSplit {
    pub fn total(&self) -> u128 {
        self.casual + self.registered
    }
}

/// Sum casual and registered riders.
pub fn split_casual_registered(records: &[RentalRecord]) -> RiderSplit {
    let (casual, registered) = records
        .iter()
        .fold((0u128, 0u128), |(c, r), rec| {
            (c + u128::from(rec.casual), r + u128::from(rec.registered))
        });

    let all = casual + registered;
    let share = |part: u128| {
        part.checked_mul(100)
            .and_then(|scaled| round_ratio(scaled, all, 1, Rounding::HalfEven))
    };

    RiderSplit {
        casual,
        registered,
        casual_share: share(casual),
        registered_share: share(registered),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(day: u32, season: Season, weekday: u8, casual: u64, registered: u64) -> RentalRecord {
        RentalRecord {
            date: NaiveDate::from_ymd_opt(2011, 3, day).unwrap(),
            season,
            weekday,
            temperature: 0.4,
            wind_speed: 0.2,
            casual,
            registered,
            total: casual + registered,
        }
    }

    fn sample() -> Vec<RentalRecord> {
        vec![
            record(1, Season::Spring, 0, 100, 900),
            record(2, Season::Spring, 1, 50, 450),
            record(3, Season::Summer, 0, 300, 1700),
            record(4, Season::Winter, 6, 10, 90),
        ]
    }

    #[test]
    fn test_season_totals() {
        let totals = aggregate_by_season(&sample());
        assert_eq!(totals.get(&Season::Spring), Some(&1500));
        assert_eq!(totals.get(&Season::Summer), Some(&2000));
        assert_eq!(totals.get(&Season::Winter), Some(&100));
        assert_eq!(totals.get(&Season::Fall), None);
        let seasons: Vec<Season> = totals.keys().copied().collect();
        assert_eq!(seasons, vec![Season::Spring, Season::Summer, Season::Winter]);
    }

    #[test]
    fn test_weekday_totals_cover_all_days() {
        let totals = aggregate_by_weekday(&sample()).unwrap();
        assert_eq!(totals.len(), 7);

        assert_eq!(totals[0].weekday, Weekday::Mon);
        assert_eq!(totals[0].label, "Monday");
        assert_eq!((totals[0].casual, totals[0].registered), (400, 2600));
        assert_eq!((totals[1].casual, totals[1].registered), (50, 450));
        assert_eq!(totals[3].total(), 0);
        assert_eq!(totals[6].label, "Sunday");
        assert_eq!(totals[6].total(), 100);
    }

    #[test]
    fn test_invalid_weekday_rejected() {
        let mut data = sample();
        data.push(record(5, Season::Spring, 7, 1, 1));
        let err = aggregate_by_weekday(&data).unwrap_err();
        assert!(matches!(err, BikeshareError::InvalidWeekday { value: 7, .. }));
    }

    #[test]
    fn test_rider_split() {
        let split = split_casual_registered(&sample());
        assert_eq!(split.casual, 460);
        assert_eq!(split.registered, 3140);
        assert_eq!(split.total(), 3600);
        assert_eq!(split.casual_share, Some(12.8));
        assert_eq!(split.registered_share, Some(87.2));
    }

    #[test]
    fn test_rider_split_without_riders() {
        let split = split_casual_registered(&[record(1, Season::Fall, 2, 0, 0)]);
        assert_eq!(split.total(), 0);
        assert_eq!(split.casual_share, None);
    }

    #[test]
    fn test_sums_beyond_u64_do_not_overflow() {
        let half = u64::MAX / 2;
        let data = vec![
            record(1, Season::Fall, 3, half, half),
            record(2, Season::Fall, 3, half, half),
        ];
        let doubled = 2 * u128::from(half);

        assert_eq!(aggregate_by_season(&data).get(&Season::Fall), Some(&(2 * doubled)));

        let thursday = &aggregate_by_weekday(&data).unwrap()[3];
        assert_eq!((thursday.casual, thursday.registered), (doubled, doubled));
        assert_eq!(thursday.total(), 2 * doubled);

        let split = split_casual_registered(&data);
        assert_eq!(split.total(), 2 * doubled);
        assert_eq!(split.casual_share, Some(50.0));
    }
}

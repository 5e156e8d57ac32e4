//! Property-based tests for the aggregation pipeline.
//!
//! Datasets are generated with the invariants real data must satisfy
//! (unique dates, `total == casual + registered`), then each pipeline
//! operation is checked for the guarantees callers rely on.
//!
//! ```bash
//! cargo test -p bikeshare --test property_tests
//! PROPTEST_CASES=10000 cargo test -p bikeshare --test property_tests
//! ```

use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use bikeshare::{
    Bounds, Dataset, DateRange, RangeSelection, RentalRecord, Season, aggregate_by_season,
    aggregate_by_weekday, bucketize, resolve_range, split_casual_registered, summarize,
};

// =============================================================================
// Test Strategies
// =============================================================================

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, 1).unwrap()
}

fn season() -> impl Strategy<Value = Season> {
    prop_oneof![
        Just(Season::Spring),
        Just(Season::Summer),
        Just(Season::Fall),
        Just(Season::Winter),
    ]
}

/// Records on distinct days within two years, in arbitrary order.
fn records() -> impl Strategy<Value = Vec<RentalRecord>> {
    prop::collection::btree_set(0u64..730, 1..120)
        .prop_flat_map(|days| {
            let days: Vec<u64> = days.into_iter().collect();
            let n = days.len();
            (
                Just(days),
                prop::collection::vec(
                    (season(), 0u8..7, 0.0f64..1.0, 0.0f64..1.0, 0u64..3500, 0u64..7000),
                    n,
                ),
            )
        })
        .prop_map(|(days, fields)| {
            days.into_iter()
                .zip(fields)
                .map(|(offset, (season, weekday, temperature, wind_speed, casual, registered))| {
                    RentalRecord {
                        date: base_date() + Days::new(offset),
                        season,
                        weekday,
                        temperature,
                        wind_speed,
                        casual,
                        registered,
                        total: casual + registered,
                    }
                })
                .collect()
        })
        .prop_shuffle()
}

fn date_in_window() -> impl Strategy<Value = NaiveDate> {
    (0u64..800).prop_map(|offset| base_date() + Days::new(offset))
}

// =============================================================================
// Filter Properties
// =============================================================================

proptest! {
    /// Filtered records lie inside the range, in chronological order.
    #[test]
    fn filter_respects_range(data in records(), a in date_in_window(), b in date_in_window()) {
        let dataset = Dataset::from_records(data).unwrap();
        let range = resolve_range(&RangeSelection::Pair(a, b), dataset.bounds().unwrap());
        let view = dataset.filter(&range);

        for record in view.iter() {
            prop_assert!(range.start() <= record.date && record.date <= range.end());
        }
        for pair in view.records().windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }

        let expected = dataset.iter().filter(|r| range.contains(r.date)).count();
        prop_assert_eq!(view.len(), expected);
    }

    /// Filtering a view by its own range changes nothing.
    #[test]
    fn filter_is_idempotent(data in records(), a in date_in_window(), b in date_in_window()) {
        let dataset = Dataset::from_records(data).unwrap();
        let range = resolve_range(&RangeSelection::Pair(a, b), dataset.bounds().unwrap());

        let once = dataset.filter(&range);
        let twice = once.filter(&range);
        prop_assert_eq!(once.records(), twice.records());
    }
}

// =============================================================================
// Range Resolution Properties
// =============================================================================

proptest! {
    /// Any pair resolves to an ordered range inside the bounds, regardless of
    /// endpoint order.
    #[test]
    fn resolved_pair_is_ordered_and_clamped(
        min in date_in_window(),
        len in 0u64..400,
        a in date_in_window(),
        b in date_in_window(),
    ) {
        let bounds = Bounds { min_date: min, max_date: min + Days::new(len) };
        let forward = resolve_range(&RangeSelection::Pair(a, b), bounds);
        let backward = resolve_range(&RangeSelection::Pair(b, a), bounds);

        prop_assert_eq!(forward, backward);
        prop_assert!(forward.start() <= forward.end());
        prop_assert!(bounds.contains(forward.start()));
        prop_assert!(bounds.contains(forward.end()));
    }

    /// Reversed in-bounds endpoints are swapped, not rejected.
    #[test]
    fn reversed_pair_is_swapped(offset in 0u64..300, len in 1u64..300) {
        let bounds = Bounds { min_date: base_date(), max_date: base_date() + Days::new(1000) };
        let start = base_date() + Days::new(offset);
        let end = start + Days::new(len);

        let range = resolve_range(&RangeSelection::Pair(end, start), bounds);
        prop_assert_eq!(range, DateRange::new(start, end).unwrap());
    }

    /// Single dates always fall back to the full range.
    #[test]
    fn single_date_falls_back(d in date_in_window()) {
        let bounds = Bounds { min_date: base_date(), max_date: base_date() + Days::new(700) };
        prop_assert_eq!(resolve_range(&RangeSelection::Single(d), bounds), bounds.full_range());
    }

    /// Arbitrary text never fails to resolve.
    #[test]
    fn raw_text_always_resolves(start in ".{0,20}", end in ".{0,20}") {
        let bounds = Bounds { min_date: base_date(), max_date: base_date() + Days::new(30) };
        let selection = RangeSelection::from_parts(Some(start.as_str()), Some(end.as_str()));
        let range = resolve_range(&selection, bounds);
        prop_assert!(range.start() <= range.end());
    }
}

// =============================================================================
// Aggregation Properties
// =============================================================================

proptest! {
    /// Every record lands in exactly one category or in the unclassified count.
    #[test]
    fn bucketize_never_drops_records(data in records()) {
        let buckets = bucketize(&data);
        prop_assert_eq!(buckets.total(), data.len());
    }

    /// Casual plus registered equals total rentals.
    #[test]
    fn split_matches_summary(data in records()) {
        let split = split_casual_registered(&data);
        prop_assert_eq!(split.casual + split.registered, summarize(&data).total_rentals);
    }

    /// Grouped results do not depend on row order.
    #[test]
    fn aggregations_ignore_row_order(data in records(), seed in any::<u64>()) {
        let mut shuffled = data.clone();
        fastrand::Rng::with_seed(seed).shuffle(&mut shuffled);

        prop_assert_eq!(aggregate_by_season(&data), aggregate_by_season(&shuffled));
        prop_assert_eq!(
            aggregate_by_weekday(&data).unwrap(),
            aggregate_by_weekday(&shuffled).unwrap()
        );
        prop_assert_eq!(summarize(&data), summarize(&shuffled));
    }

    /// Season totals add up to the grand total.
    #[test]
    fn season_totals_sum_to_total(data in records()) {
        let seasons: u128 = aggregate_by_season(&data).values().sum();
        prop_assert_eq!(seasons, summarize(&data).total_rentals);
    }
}

//! Fuzz target for date parsing and range resolution.
//!
//! Any pair of strings must resolve to an ordered range inside the bounds.

#![no_main]

use bikeshare::dataset::parse_date;
use bikeshare::{Bounds, RangeSelection, resolve_range};
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (start, end) = input;
    let _ = parse_date(start);

    let bounds = Bounds {
        min_date: NaiveDate::from_ymd_opt(2011, 1, 1).unwrap(),
        max_date: NaiveDate::from_ymd_opt(2012, 12, 31).unwrap(),
    };
    let range = resolve_range(&RangeSelection::from_parts(Some(start), Some(end)), bounds);
    assert!(range.start() <= range.end());
    assert!(bounds.contains(range.start()) && bounds.contains(range.end()));
});

//! Fuzz target for the loader.
//!
//! Arbitrary bytes must either load into a dataset or produce an error,
//! and a loaded dataset must summarize without panicking.

#![no_main]

use bikeshare::{Dashboard, RangeSelection};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let dashboard = Dashboard::new();
    if let Ok(dataset) = dashboard.load_bytes(data) {
        let _ = dashboard.report(&dataset, RangeSelection::Empty);
    }

    // Same bytes behind a valid header exercise per-cell decoding
    let mut with_header =
        b"dteday,season,one_of_week,temp,wind_speed,casual,registered,count_cr\n".to_vec();
    with_header.extend_from_slice(data);
    if let Ok(dataset) = dashboard.load_bytes(&with_header) {
        let _ = dashboard.report(&dataset, RangeSelection::Empty);
    }
});

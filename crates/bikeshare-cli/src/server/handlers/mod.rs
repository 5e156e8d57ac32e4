//! API request handlers.

mod dashboard;
mod data;

pub use dashboard::*;
pub use data::*;

use bikeshare::RangeSelection;
use serde::Deserialize;

/// `start`/`end` query parameters shared by range-aware endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl RangeQuery {
    pub fn selection(&self) -> RangeSelection {
        RangeSelection::from_parts(self.start.as_deref(), self.end.as_deref())
    }
}

//! Typed rental records and the immutable dataset built from them.

mod loader;
mod record;
mod store;

pub use loader::{RecordLoader, parse_date};
pub use record::{RentalRecord, Season};
pub use store::{Bounds, Dataset};

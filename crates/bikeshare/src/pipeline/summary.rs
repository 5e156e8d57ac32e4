//! Headline metrics for a set of records.

use serde::{Deserialize, Serialize};

use crate::dataset::RentalRecord;

/// Rounding rule for reported averages and shares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Ties go to the even neighbour (250.125 -> 250.12).
    #[default]
    HalfEven,
    /// Ties go away from zero (250.125 -> 250.13).
    HalfUp,
}

/// Total and average rentals over a set of records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records (days) summarized.
    pub days: usize,
    /// Sum of `total` over the records.
    pub total_rentals: u128,
    /// Mean daily total rounded to 2 decimals; `None` when there are no records.
    pub average_daily_rentals: Option<f64>,
}

impl Summary {
    /// True when the summary covers no records.
    pub fn is_empty(&self) -> bool {
        self.days == 0
    }
}

/// Summarize with the default half-even rounding.
pub fn summarize(records: &[RentalRecord]) -> Summary {
    summarize_with(records, Rounding::default())
}

/// Summarize records. The result does not depend on record order.
pub fn summarize_with(records: &[RentalRecord], rounding: Rounding) -> Summary {
    let days = records.len();
    // u64 inputs over fewer than 2^64 records cannot overflow a u128 sum.
    let total: u128 = records.iter().map(|r| u128::from(r.total)).sum();

    Summary {
        days,
        total_rentals: total,
        average_daily_rentals: round_ratio(total, days as u128, 2, rounding),
    }
}

/// `numer / denom` rounded to `decimals` places, computed on integers so ties
/// are detected exactly. `None` when `denom` is zero or the scaled numerator
/// does not fit in a `u128`.
pub(crate) fn round_ratio(
    numer: u128,
    denom: u128,
    decimals: u32,
    rounding: Rounding,
) -> Option<f64> {
    if denom == 0 {
        return None;
    }

    let scaled = numer.checked_mul(10u128.checked_pow(decimals)?)?;
    let mut quotient = scaled / denom;
    let remainder = scaled % denom;
    // `remainder` against `denom - remainder` compares twice the remainder
    // with `denom` without doubling it.
    let rest = denom - remainder;

    let round_up = match rounding {
        Rounding::HalfUp => remainder >= rest,
        Rounding::HalfEven => remainder > rest || (remainder == rest && quotient % 2 == 1),
    };
    if round_up {
        quotient += 1;
    }

    Some(quotient as f64 / 10f64.powi(decimals as i32))
}

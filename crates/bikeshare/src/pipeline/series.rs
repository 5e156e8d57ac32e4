//! Point series behind the trend and scatter charts.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dataset::RentalRecord;

/// One day on the rental trend line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    /// Calendar year, used to split the line per year.
    pub year: i32,
    pub total: u64,
}

/// Daily totals in chronological order.
pub fn daily_trend(records: &[RentalRecord]) -> Vec<TrendPoint> {
    records
        .iter()
        .map(|r| TrendPoint {
            date: r.date,
            year: r.year(),
            total: r.total,
        })
        .collect()
}

/// A weather measurement plotted against total rentals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    Temperature,
    WindSpeed,
}

impl Measure {
    fn value(&self, record: &RentalRecord) -> f64 {
        match self {
            Measure::Temperature => record.temperature,
            Measure::WindSpeed => record.wind_speed,
        }
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "temperature" | "temp" => Ok(Measure::Temperature),
            "wind_speed" | "windspeed" | "wind" => Ok(Measure::WindSpeed),
            _ => Err(format!("Unknown measure: {}. Use temperature or wind_speed.", s)),
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Temperature => write!(f, "temperature"),
            Measure::WindSpeed => write!(f, "wind_speed"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u64,
}

/// Measurement/total pairs and their Pearson correlation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub measure: Measure,
    pub points: Vec<ScatterPoint>,
    /// `None` with fewer than two points or when either axis is constant.
    pub correlation: Option<f64>,
}

/// Scatter series of `measure` against daily totals.
pub fn scatter(records: &[RentalRecord], measure: Measure) -> ScatterSeries {
    let points: Vec<ScatterPoint> = records
        .iter()
        .map(|r| ScatterPoint {
            x: measure.value(r),
            y: r.total,
        })
        .collect();
    let correlation = pearson(&points);

    ScatterSeries {
        measure,
        points,
        correlation,
    }
}

fn pearson(points: &[ScatterPoint]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y as f64).sum::<f64>() / n;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for p in points {
        let dx = p.x - mean_x;
        let dy = p.y as f64 - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }

    let r = cov / (var_x.sqrt() * var_y.sqrt());
    r.is_finite().then(|| r.clamp(-1.0, 1.0))
}

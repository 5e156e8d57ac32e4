//! Conversion of a raw [`DataTable`] into a typed [`Dataset`].

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use super::record::{RentalRecord, Season};
use super::store::Dataset;
use crate::config::{ColumnMapping, DashboardConfig};
use crate::error::{BikeshareError, Result};
use crate::input::{DataTable, is_missing};

/// Date-only formats accepted in the date column.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats accepted in the date column; the time part is dropped.
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a calendar date in one of the accepted formats.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Header positions of each record field.
struct ColumnIndices {
    date: usize,
    season: usize,
    weekday: usize,
    temperature: usize,
    wind_speed: usize,
    casual: usize,
    registered: usize,
    total: usize,
}

impl ColumnIndices {
    fn resolve(table: &DataTable, columns: &ColumnMapping) -> Result<Self> {
        let find = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| BikeshareError::MissingColumn {
                    column: name.to_string(),
                    available: table.headers.join(", "),
                })
        };

        Ok(Self {
            date: find(&columns.date)?,
            season: find(&columns.season)?,
            weekday: find(&columns.weekday)?,
            temperature: find(&columns.temperature)?,
            wind_speed: find(&columns.wind_speed)?,
            casual: find(&columns.casual)?,
            registered: find(&columns.registered)?,
            total: find(&columns.total)?,
        })
    }
}

/// Builds datasets from parsed tables according to a [`DashboardConfig`].
pub struct RecordLoader<'a> {
    config: &'a DashboardConfig,
}

impl<'a> RecordLoader<'a> {
    pub fn new(config: &'a DashboardConfig) -> Self {
        Self { config }
    }

    /// Decode every row of `table` and assemble a sorted dataset.
    pub fn load_table(&self, table: &DataTable) -> Result<Dataset> {
        let columns = &self.config.columns;
        let idx = ColumnIndices::resolve(table, columns)?;

        let mut records = Vec::with_capacity(table.row_count());
        let mut inconsistent = 0usize;

        for (row_num, row) in table.numbered_rows() {
            let cell = |col: usize| row.get(col).map(String::as_str).unwrap_or("");

            let date_raw = required(cell(idx.date), row_num, &columns.date)?;
            let date = parse_date(date_raw).ok_or_else(|| BikeshareError::Parse {
                row: row_num,
                column: columns.date.clone(),
                message: format!("'{}' is not a recognized date", date_raw),
            })?;

            let season_raw = required(cell(idx.season), row_num, &columns.season)?;
            let season: Season = season_raw.parse().map_err(|message| BikeshareError::Parse {
                row: row_num,
                column: columns.season.clone(),
                message,
            })?;

            let record = RentalRecord {
                date,
                season,
                weekday: parse_number(cell(idx.weekday), row_num, &columns.weekday)?,
                temperature: parse_number(cell(idx.temperature), row_num, &columns.temperature)?,
                wind_speed: parse_number(cell(idx.wind_speed), row_num, &columns.wind_speed)?,
                casual: parse_number(cell(idx.casual), row_num, &columns.casual)?,
                registered: parse_number(cell(idx.registered), row_num, &columns.registered)?,
                total: parse_number(cell(idx.total), row_num, &columns.total)?,
            };

            if !record.is_consistent() {
                if self.config.strict_totals {
                    return Err(BikeshareError::InconsistentTotal {
                        row: row_num,
                        casual: record.casual,
                        registered: record.registered,
                        total: record.total,
                    });
                }
                inconsistent += 1;
                warn!(
                    row = row_num,
                    date = %record.date,
                    casual = record.casual,
                    registered = record.registered,
                    total = record.total,
                    "total does not equal casual + registered"
                );
            }

            records.push(record);
        }

        let dataset = Dataset::from_records(records)?;
        debug!(records = dataset.len(), inconsistent, "decoded rental records");
        Ok(dataset)
    }
}

fn required<'v>(value: &'v str, row: usize, column: &str) -> Result<&'v str> {
    if is_missing(value) {
        return Err(BikeshareError::Parse {
            row,
            column: column.to_string(),
            message: "missing value".to_string(),
        });
    }
    Ok(value.trim())
}

fn parse_number<T>(value: &str, row: usize, column: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = required(value, row, column)?;
    value.parse().map_err(|e: T::Err| BikeshareError::Parse {
        row,
        column: column.to_string(),
        message: format!("'{}': {}", value, e),
    })
}

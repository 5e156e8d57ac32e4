//! Dashboard configuration.
//!
//! Every field has a default matching the bundled day-level dataset, so a
//! config file only needs to name what differs:
//!
//! ```toml
//! strict_totals = false
//! rounding = "half_up"
//!
//! [columns]
//! total = "cnt"
//! weekday = "weekday"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BikeshareError, Result};
use crate::input::ParserConfig;
use crate::pipeline::Rounding;

/// Environment variable naming a config file when none is given explicitly.
pub const CONFIG_ENV_VAR: &str = "BIKESHARE_CONFIG";

/// Header names for each field of a rental record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMapping {
    pub date: String,
    pub season: String,
    pub weekday: String,
    pub temperature: String,
    pub wind_speed: String,
    pub casual: String,
    pub registered: String,
    pub total: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: "dteday".to_string(),
            season: "season".to_string(),
            weekday: "one_of_week".to_string(),
            temperature: "temp".to_string(),
            wind_speed: "wind_speed".to_string(),
            casual: "casual".to_string(),
            registered: "registered".to_string(),
            total: "count_cr".to_string(),
        }
    }
}

impl ColumnMapping {
    /// All configured names, in record field order.
    pub fn names(&self) -> [&str; 8] {
        [
            &self.date,
            &self.season,
            &self.weekday,
            &self.temperature,
            &self.wind_speed,
            &self.casual,
            &self.registered,
            &self.total,
        ]
    }
}

/// Configuration for loading and summarizing a dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Column header names.
    pub columns: ColumnMapping,
    /// Field delimiter (None = auto-detect).
    pub delimiter: Option<char>,
    /// Reject rows where total != casual + registered.
    pub strict_totals: bool,
    /// Rounding applied to the average daily rentals.
    pub rounding: Rounding,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            columns: ColumnMapping::default(),
            delimiter: None,
            strict_totals: true,
            rounding: Rounding::HalfEven,
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| BikeshareError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "loading dashboard config");
        Self::from_toml_str(&content)
    }

    /// Resolve the configuration: an explicit path wins, then the
    /// `BIKESHARE_CONFIG` environment variable, then defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match env::var_os(CONFIG_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::from_file(PathBuf::from(path)),
            _ => Ok(Self::default()),
        }
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if let Some(d) = self.delimiter {
            if !d.is_ascii() || d == '"' || d == '\n' || d == '\r' {
                return Err(BikeshareError::Config(format!(
                    "delimiter must be a single ASCII character other than a quote or newline, got {:?}",
                    d
                )));
            }
        }

        let names = self.columns.names();
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(BikeshareError::Config("column names must not be empty".to_string()));
            }
            if names[..i].contains(name) {
                return Err(BikeshareError::Config(format!(
                    "column '{}' is mapped to more than one field",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Parser settings derived from this configuration.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            delimiter: self.delimiter.map(|d| d as u8),
            ..ParserConfig::default()
        }
    }
}

//! CLI command implementations.

pub mod breakdown;
pub mod inspect;
pub mod serve;
pub mod summary;

use std::path::Path;

use bikeshare::{Dashboard, DashboardConfig, Dataset, SourceMetadata};

/// Load a data file with the configured dashboard.
pub fn load_dataset(
    file: &Path,
    config: DashboardConfig,
) -> Result<(Dashboard, Dataset, SourceMetadata), Box<dyn std::error::Error>> {
    let dashboard = Dashboard::with_config(config);
    let (dataset, source) = dashboard.load(file)?;
    Ok((dashboard, dataset, source))
}

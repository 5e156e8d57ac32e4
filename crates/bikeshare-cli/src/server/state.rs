//! Application state for the web server.

use std::sync::Arc;

use bikeshare::{Dashboard, Dataset, SourceMetadata};

/// Shared application state.
///
/// The dataset never changes after loading, so handlers share it without
/// locking and recompute every response from it.
#[derive(Clone)]
pub struct AppState {
    /// Dashboard holding the load-time configuration.
    pub dashboard: Arc<Dashboard>,
    /// The loaded dataset.
    pub dataset: Arc<Dataset>,
    /// Metadata of the file the dataset came from.
    pub source: Arc<SourceMetadata>,
}

impl AppState {
    /// Create new application state.
    pub fn new(dashboard: Dashboard, dataset: Dataset, source: SourceMetadata) -> Self {
        Self {
            dashboard: Arc::new(dashboard),
            dataset: Arc::new(dataset),
            source: Arc::new(source),
        }
    }
}

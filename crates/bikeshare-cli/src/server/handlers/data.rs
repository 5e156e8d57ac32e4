//! Data preview handler.

use axum::{
    Json,
    extract::{Query, State},
};
use bikeshare::{DateRange, RangeSelection, RentalRecord, resolve_range};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for the data preview endpoint.
#[derive(Serialize)]
pub struct DataPreviewResponse {
    /// The resolved range the rows come from.
    pub range: DateRange,
    /// Records in date order (first N).
    pub rows: Vec<RentalRecord>,
    /// Number of records in the range.
    pub total_rows: usize,
    /// Whether the rows were truncated.
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub struct DataQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: Option<usize>,
}

/// Default number of rows to return in preview.
const DEFAULT_PREVIEW_ROWS: usize = 100;

/// Upper bound on `limit`.
const MAX_PREVIEW_ROWS: usize = 1000;

/// Get a preview of the records in the requested range.
pub async fn get_data_preview(
    State(state): State<AppState>,
    Query(query): Query<DataQuery>,
) -> Result<Json<DataPreviewResponse>, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_PREVIEW_ROWS);
    if limit == 0 || limit > MAX_PREVIEW_ROWS {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {}",
            MAX_PREVIEW_ROWS
        )));
    }

    let selection = RangeSelection::from_parts(query.start.as_deref(), query.end.as_deref());
    let range = resolve_range(&selection, state.dataset.bounds()?);
    let view = state.dataset.filter(&range);

    let total_rows = view.len();
    let rows: Vec<RentalRecord> = view.iter().take(limit).cloned().collect();

    Ok(Json(DataPreviewResponse {
        range,
        truncated: total_rows > rows.len(),
        rows,
        total_rows,
    }))
}

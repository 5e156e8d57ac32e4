//! Dashboard metric handlers.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use bikeshare::{
    Bounds, BucketCounts, DashboardReport, DateRange, Measure, RangeSummary, RiderSplit,
    ScatterSeries, Season, SourceMetadata, TrendPoint, ViewStatus, WeekdayTotals,
    aggregate_by_season, aggregate_by_weekday, bucketize, scatter, split_casual_registered,
};
use serde::Serialize;

use super::RangeQuery;
use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub records: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        records: state.dataset.len(),
    })
}

#[derive(Serialize)]
pub struct SourceResponse {
    pub source: SourceMetadata,
    pub bounds: Bounds,
    pub records: usize,
}

pub async fn get_source(State(state): State<AppState>) -> Result<Json<SourceResponse>, ApiError> {
    Ok(Json(SourceResponse {
        source: (*state.source).clone(),
        bounds: state.dataset.bounds()?,
        records: state.dataset.len(),
    }))
}

/// The complete report for the requested range.
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<DashboardReport>, ApiError> {
    let report = state.dashboard.report(&state.dataset, query.selection())?;
    Ok(Json(report))
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub bounds: Bounds,
    pub range: DateRange,
    pub status: ViewStatus,
    pub days: usize,
    pub total_rentals: u128,
    pub average_daily_rentals: Option<f64>,
}

impl From<RangeSummary> for SummaryResponse {
    fn from(ranged: RangeSummary) -> Self {
        Self {
            bounds: ranged.bounds,
            range: ranged.range,
            status: ranged.status,
            days: ranged.summary.days,
            total_rentals: ranged.summary.total_rentals,
            average_daily_rentals: ranged.summary.average_daily_rentals,
        }
    }
}

pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let ranged = state
        .dashboard
        .summarize_range(&state.dataset, query.selection())?;
    Ok(Json(ranged.into()))
}

#[derive(Serialize)]
pub struct TrendResponse {
    pub range: DateRange,
    pub status: ViewStatus,
    pub points: Vec<TrendPoint>,
}

pub async fn get_trend(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<TrendResponse>, ApiError> {
    let ranged = state
        .dashboard
        .summarize_range(&state.dataset, query.selection())?;
    Ok(Json(TrendResponse {
        range: ranged.range,
        status: ranged.status,
        points: ranged.trend,
    }))
}

pub async fn get_seasons(State(state): State<AppState>) -> Json<BTreeMap<Season, u128>> {
    Json(aggregate_by_season(state.dataset.records()))
}

pub async fn get_weekdays(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeekdayTotals>>, ApiError> {
    Ok(Json(aggregate_by_weekday(state.dataset.records())?))
}

pub async fn get_riders(State(state): State<AppState>) -> Json<RiderSplit> {
    Json(split_casual_registered(state.dataset.records()))
}

pub async fn get_buckets(State(state): State<AppState>) -> Json<BucketCounts> {
    Json(bucketize(state.dataset.records()))
}

/// Scatter series for `temperature` or `wind_speed`.
pub async fn get_scatter(
    State(state): State<AppState>,
    Path(measure): Path<String>,
) -> Result<Json<ScatterSeries>, ApiError> {
    let measure: Measure = measure
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Unknown measure: {}", measure)))?;
    Ok(Json(scatter(state.dataset.records(), measure)))
}

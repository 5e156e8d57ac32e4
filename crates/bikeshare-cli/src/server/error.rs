//! API error types and handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bikeshare::BikeshareError;
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from client.
    BadRequest(String),
    /// Error from the bikeshare library.
    Bikeshare(BikeshareError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            // The dataset was validated at startup; anything failing now is
            // a problem with the served data, not the request.
            ApiError::Bikeshare(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "bikeshare_error",
                e.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<BikeshareError> for ApiError {
    fn from(err: BikeshareError) -> Self {
        ApiError::Bikeshare(err)
    }
}

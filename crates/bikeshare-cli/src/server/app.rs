//! Axum application setup.

use axum::{Router, http::Uri, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::error::ApiError;
use super::handlers;
use super::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration for local development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/source", get(handlers::get_source))
        // Range-aware views
        .route("/dashboard", get(handlers::get_dashboard))
        .route("/summary", get(handlers::get_summary))
        .route("/trend", get(handlers::get_trend))
        .route("/data", get(handlers::get_data_preview))
        // Full-dataset views
        .route("/seasons", get(handlers::get_seasons))
        .route("/weekdays", get(handlers::get_weekdays))
        .route("/riders", get(handlers::get_riders))
        .route("/buckets", get(handlers::get_buckets))
        .route("/scatter/:measure", get(handlers::get_scatter));

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}

/// Start the web server and run until Ctrl+C.
pub async fn run_server(
    state: AppState,
    host: &str,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind((host, port)).await?;

    info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}

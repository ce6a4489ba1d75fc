use axum::http::HeaderValue;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

/// Builds the API router: the inventory endpoints the dashboard frontend
/// consumes, CORS-restricted to the configured frontend origin.
pub fn build_app(state: AppState) -> Router {
    let cors = match state.frontend_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new().allow_origin(origin),
        Err(_) => {
            tracing::warn!(origin = %state.frontend_origin, "Invalid frontend origin; allowing any origin");
            CorsLayer::new().allow_origin(tower_http::cors::Any)
        }
    };

    Router::new()
        .route("/api/metrics", get(handlers::metrics::metrics_list))
        .route("/api/metrics/:instance_id", get(handlers::metrics::metric_detail))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

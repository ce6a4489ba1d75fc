use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::inventory::find_instance;
use crate::models::AppState;

/// Serves the full loaded inventory.
pub async fn metrics_list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.instances.as_ref().clone())
}

/// Serves one record by `InstanceId`, or a 404 JSON error.
pub async fn metric_detail(
    State(state): State<AppState>,
    Path(instance_id): Path<String>,
) -> impl IntoResponse {
    match find_instance(&state.instances, &instance_id) {
        Some(instance) => Json(instance.clone()).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": format!("Instance with ID {} not found", instance_id)
            })),
        )
            .into_response(),
    }
}

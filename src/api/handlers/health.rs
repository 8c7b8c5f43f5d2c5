use crate::types::HealthResponse;
use axum::Json;

/// Liveness message for the service root
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running")
    ),
    tag = "health"
)]
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Memograph server is running. See /api-docs/openapi.json for the API schema."
    }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResearchRequest {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default = "default_memo_depth")]
    pub memo_depth: String,
}

fn default_memo_depth() -> String {
    "standard".to_string()
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResearchResponse {
    pub memo_depth: String,
    pub final_report_markdown: String,
    pub duration_ms: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("LLM error: {0}")]
    LLM(String),

    #[error("Workflow error: {0}")]
    Workflow(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({
            "error": self.to_string()
        });

        (axum::http::StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

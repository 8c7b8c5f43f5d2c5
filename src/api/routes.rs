use crate::AppState;
use crate::api::ApiDoc;
use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn create_router() -> Router<AppState> {
    // Open CORS: the memo frontend runs on a separate dev origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(crate::api::handlers::health::root))
        .route("/health", get(crate::api::handlers::health::health))
        .route(
            "/research",
            post(crate::api::handlers::research::run_research),
        )
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

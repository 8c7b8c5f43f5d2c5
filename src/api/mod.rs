//! HTTP API Handlers and Routes
//!
//! This module provides the REST API layer for Memograph, built on the Axum
//! web framework.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//!
//! # API Endpoints
//!
//! ## Research (`/research`)
//! - `POST /research` - Run the full memo pipeline for one company
//!
//! ## Health
//! - `GET /` - Liveness message
//! - `GET /health` - Health check
//!
//! ## Documentation
//! - `GET /api-docs/openapi.json` - OpenAPI document for the endpoints above
//!
//! # Errors
//!
//! Failed runs surface as a single JSON failure body:
//! ```text
//! {"error": "Workflow error: stage task panicked"}
//! ```

/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use crate::types::{HealthResponse, ResearchRequest, ResearchResponse};
use utoipa::OpenApi;

/// OpenAPI document for the research memo API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health::root,
        handlers::health::health,
        handlers::research::run_research,
    ),
    components(schemas(ResearchRequest, ResearchResponse, HealthResponse)),
    tags(
        (name = "health", description = "Liveness and readiness"),
        (name = "research", description = "Company research memo pipeline")
    )
)]
pub struct ApiDoc;

use crate::{
    AppState,
    graph::build_research_graph,
    state::ResearchState,
    types::{ResearchRequest, ResearchResponse, Result},
};
use axum::{Json, extract::State};
use std::time::Instant;

/// Run the full research pipeline for one company
#[utoipa::path(
    post,
    path = "/research",
    request_body = ResearchRequest,
    responses(
        (status = 200, description = "Memo generated", body = ResearchResponse),
        (status = 422, description = "Invalid input"),
        (status = 500, description = "Pipeline failed")
    ),
    tag = "research"
)]
pub async fn run_research(
    State(state): State<AppState>,
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ResearchResponse>> {
    let start = Instant::now();

    let initial = ResearchState::seeded(
        &payload.company_name,
        payload.website.as_deref(),
        payload.industry.as_deref(),
        &payload.memo_depth,
    );

    let graph = build_research_graph(
        state.search.clone(),
        state.aum_source.clone(),
        state.generator.clone(),
    )?;

    let run = match graph.run(initial).await {
        Ok(run) => run,
        Err(e) => {
            tracing::error!("research run for '{}' failed: {}", payload.company_name, e);
            return Err(e);
        }
    };

    tracing::info!(
        run_id = %run.run_id,
        company = %payload.company_name,
        stages = run.stages.len(),
        duration_ms = run.duration_ms,
        "research run complete"
    );

    Ok(Json(ResearchResponse {
        memo_depth: payload.memo_depth,
        final_report_markdown: run.state.final_report_markdown.unwrap_or_default(),
        duration_ms: start.elapsed().as_millis() as u64,
    }))
}

//! Research Pipeline Graph
//!
//! Wires the nine pipeline stages into the fan-out/fan-in shape: the planner
//! feeds five parallel topic collectors, which rejoin into curation, then
//! section drafting, then the quality gate.

/// The stage trait and the levelled graph executor.
pub mod engine;

pub use engine::{GraphRun, Stage, StageGraph, StageGraphBuilder, StageRun};

use crate::llm::TextGenerator;
use crate::stages::{
    AumCollector, CultureCareersCollector, Curation, FundamentalsCollector, LeadershipCollector,
    OutlookStrategyCollector, Planner, QualityGate, SectionWriter,
};
use crate::tools::aum::ManagerAumSource;
use crate::tools::search::EvidenceSearch;
use crate::types::Result;
use std::sync::Arc;

/// Build the company research graph over the given providers.
pub fn build_research_graph(
    search: Arc<dyn EvidenceSearch>,
    aum_source: Arc<dyn ManagerAumSource>,
    generator: Arc<dyn TextGenerator>,
) -> Result<StageGraph> {
    StageGraph::builder()
        .add_stage(Arc::new(Planner), &[])
        .add_stage(
            Arc::new(FundamentalsCollector::new(Arc::clone(&search))),
            &["planner"],
        )
        .add_stage(
            Arc::new(LeadershipCollector::new(Arc::clone(&search))),
            &["planner"],
        )
        .add_stage(
            Arc::new(AumCollector::new(Arc::clone(&search), aum_source)),
            &["planner"],
        )
        .add_stage(
            Arc::new(OutlookStrategyCollector::new(Arc::clone(&search))),
            &["planner"],
        )
        .add_stage(
            Arc::new(CultureCareersCollector::new(search)),
            &["planner"],
        )
        .add_stage(
            Arc::new(Curation),
            &[
                "fundamentals",
                "leadership",
                "aum",
                "outlook_strategy",
                "culture_careers",
            ],
        )
        .add_stage(Arc::new(SectionWriter::new(generator)), &["curation"])
        .add_stage(Arc::new(QualityGate), &["section_writer"])
        .build()
}

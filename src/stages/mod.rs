//! Pipeline Stages
//!
//! The nine stages of the memo pipeline, one module each: the planner, the
//! five topic collectors, curation, the section writer and the quality gate.
//! Every stage implements [`Stage`](crate::graph::Stage) and is wired into
//! the research graph by [`build_research_graph`](crate::graph::build_research_graph).

/// AUM evidence collection.
pub mod aum;
/// The fixed section catalog.
pub mod catalog;
/// Culture and careers evidence collection.
pub mod culture_careers;
/// Evidence deduplication into the curated pool.
pub mod curation;
/// Fundamentals and positioning evidence collection.
pub mod fundamentals;
/// Leadership evidence collection.
pub mod leadership;
/// Outlook and strategy evidence collection.
pub mod outlook_strategy;
/// Identity normalization.
pub mod planner;
/// Quality gate and report rendering.
pub mod qa_final;
/// Section drafting against the curated pool.
pub mod section_writer;

pub use aum::AumCollector;
pub use culture_careers::CultureCareersCollector;
pub use curation::Curation;
pub use fundamentals::FundamentalsCollector;
pub use leadership::LeadershipCollector;
pub use outlook_strategy::OutlookStrategyCollector;
pub use planner::Planner;
pub use qa_final::QualityGate;
pub use section_writer::SectionWriter;

use crate::state::{EvidenceItem, Topic};
use crate::tools::search::SearchHit;

/// Hits requested per evidence query.
pub const MAX_RESULTS: usize = 8;

/// Longest snippet taken from a hit's raw page text.
pub const MAX_SNIPPET_CHARS: usize = 800;

/// Turn one search hit into an evidence item under the collector's tag.
///
/// Snippet is the hit's content, falling back to raw page text truncated to
/// [`MAX_SNIPPET_CHARS`] characters. Hits yielding an empty snippet produce
/// no item, keeping the non-empty snippet invariant.
pub(crate) fn evidence_from_hit(source: &str, hit: SearchHit, topic: Topic) -> Option<EvidenceItem> {
    let snippet = match hit.content.filter(|content| !content.is_empty()) {
        Some(content) => content,
        None => hit
            .raw_content
            .map(|raw| raw.chars().take(MAX_SNIPPET_CHARS).collect())
            .unwrap_or_default(),
    };

    if snippet.is_empty() {
        return None;
    }

    Some(EvidenceItem {
        source: source.to_string(),
        url: hit.url,
        snippet,
        as_of: hit.published_date,
        topic: Some(topic),
        score: hit.score,
    })
}

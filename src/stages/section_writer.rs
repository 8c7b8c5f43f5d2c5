//! Section Writer Stage
//!
//! Drafts every catalog section from the curated evidence pool. Each draft
//! carries a confidence score and the pool indexes of the evidence it was
//! shown. Generator failures degrade the affected drafts instead of failing
//! the run.

use super::catalog::SECTION_SPECS;
use crate::graph::Stage;
use crate::llm::{GenerationOutcome, GenerationParams, TextGenerator};
use crate::state::{EvidenceItem, ResearchState, SectionDraft, Topic};
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Most evidence items shown to the model per section.
const MAX_CONTEXT_ITEMS: usize = 8;

/// Stand-in context when no curated evidence matches a section's topics.
const NO_EVIDENCE_CONTEXT: &str = "No direct evidence found for this section.";

const SYSTEM_PROMPT: &str = "You are a senior equity research analyst writing memos for a recruiting firm. \
Your tone is neutral, factual and concise. \
Never invent hard numbers (AUM, years, headcount) if they are not clearly \
stated in the evidence. Prefer qualitative wording instead of fabricating numbers.";

/// Memo section drafter.
pub struct SectionWriter {
    generator: Arc<dyn TextGenerator>,
}

impl SectionWriter {
    /// Create the writer over the given generation boundary.
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

/// Select up to [`MAX_CONTEXT_ITEMS`] pool items matching the section topics
/// and render them as a prompt block. Returns the block and the pool indexes
/// of the items used, in pool order.
fn build_evidence_context(pool: &[EvidenceItem], topics: &[Topic]) -> (String, Vec<usize>) {
    let mut lines: Vec<String> = Vec::new();
    let mut used: Vec<usize> = Vec::new();

    for (idx, item) in pool.iter().enumerate() {
        if !topics.is_empty() && !item.topic.is_some_and(|t| topics.contains(&t)) {
            continue;
        }

        lines.push(format!(
            "[{}] Source={}, Topic={}, AsOf={}\n{}",
            idx,
            item.source,
            item.topic.map_or("unknown", |t| t.as_str()),
            item.as_of.as_deref().unwrap_or("unknown"),
            item.snippet.trim()
        ));
        used.push(idx);

        if lines.len() >= MAX_CONTEXT_ITEMS {
            break;
        }
    }

    if lines.is_empty() {
        return (NO_EVIDENCE_CONTEXT.to_string(), Vec::new());
    }

    (lines.join("\n\n"), used)
}

#[async_trait]
impl Stage for SectionWriter {
    fn name(&self) -> &'static str {
        "section_writer"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let name = state.identity_basics.name.clone();
        let website = state.identity_basics.website.clone();
        let industry = state.identity_basics.industry.clone();
        let description = state
            .company_description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("N/A")
            .to_string();

        for spec in SECTION_SPECS {
            let (context, evidence_refs) =
                build_evidence_context(&state.curated_evidence, spec.topics);

            let user_prompt = format!(
                r#"
You are writing ONE section of a company research memo.

Section title: "{}"

Company identity:
- Name: {}
- Website: {}
- Industry: {}
- Additional description: {}

Use ONLY the evidence snippets below. Do not hallucinate facts
that are not supported by the evidence.

Evidence snippets (each has an index in square brackets):

{}

Write 1–3 short paragraphs for this section in clear, recruiter-friendly language.
Do NOT mention the evidence indexes or refer to 'snippets' explicitly.
If evidence is weak or missing, write a cautious, high-level paragraph instead of guessing.
"#,
                spec.title, name, website, industry, description, context
            );

            let params = GenerationParams {
                max_tokens: 600,
                temperature: 0.35,
            };
            let outcome = self.generator.generate(SYSTEM_PROMPT, &user_prompt, params).await;

            let draft = match outcome {
                GenerationOutcome::Text(text) => SectionDraft {
                    title: spec.title.to_string(),
                    key: spec.key.to_string(),
                    text: text.trim().to_string(),
                    confidence: 0.75,
                    caveats: Vec::new(),
                    evidence_refs,
                },
                GenerationOutcome::Unavailable { reason } => SectionDraft {
                    title: spec.title.to_string(),
                    key: spec.key.to_string(),
                    text: format!("[no generated text: {}]", reason),
                    confidence: 0.2,
                    caveats: vec![format!("generation unavailable: {}", reason)],
                    evidence_refs,
                },
            };
            state.drafts.insert(spec.key.to_string(), draft);
        }

        Ok(state)
    }
}

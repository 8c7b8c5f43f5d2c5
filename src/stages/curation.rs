//! Curation Stage
//!
//! Merges the per-topic buckets into the single curated pool. Runs only after
//! the full collector join barrier. Dedup key is the item's URL when present,
//! else the first 80 characters of its snippet; the first occurrence in the
//! fixed bucket walk wins.

use crate::graph::Stage;
use crate::state::{EvidenceItem, ResearchState};
use crate::types::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// Snippet-prefix length used as the dedup key for URL-less items.
const DEDUP_SNIPPET_CHARS: usize = 80;

/// Evidence deduplication stage.
pub struct Curation;

fn dedup_key(item: &EvidenceItem) -> String {
    match item.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => item.snippet.chars().take(DEDUP_SNIPPET_CHARS).collect(),
    }
}

#[async_trait]
impl Stage for Curation {
    fn name(&self) -> &'static str {
        "curation"
    }

    async fn run(&self, mut state: ResearchState) -> Result<ResearchState> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut pool: Vec<EvidenceItem> = Vec::new();

        let buckets = [
            &state.fundamentals_data,
            &state.positioning_data,
            &state.leadership_data,
            &state.aum_data,
            &state.founding_story_data,
            &state.outlook_data,
            &state.career_growth_data,
            &state.company_culture_data,
        ];

        for bucket in buckets {
            for item in bucket {
                if seen.insert(dedup_key(item)) {
                    pool.push(item.clone());
                }
            }
        }

        // The pool is rebuilt from the buckets each run, so rerunning the
        // stage on the same input yields the same pool.
        state.curated_evidence = pool;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Topic;

    fn item(url: Option<&str>, snippet: &str, topic: Topic) -> EvidenceItem {
        EvidenceItem {
            source: "test".to_string(),
            url: url.map(|u| u.to_string()),
            snippet: snippet.to_string(),
            as_of: None,
            topic: Some(topic),
            score: None,
        }
    }

    #[tokio::test]
    async fn test_same_url_dedups_first_wins() {
        let mut state = ResearchState::default();
        state
            .fundamentals_data
            .push(item(Some("https://x.com/a"), "first text", Topic::Fundamentals));
        state
            .aum_data
            .push(item(Some("https://x.com/a"), "second text", Topic::Aum));

        let state = Curation.run(state).await.unwrap();

        assert_eq!(state.curated_evidence.len(), 1);
        assert_eq!(state.curated_evidence[0].snippet, "first text");
        assert_eq!(state.curated_evidence[0].topic, Some(Topic::Fundamentals));
    }

    #[tokio::test]
    async fn test_urlless_items_dedup_on_snippet_prefix() {
        let shared = "x".repeat(80);
        let mut state = ResearchState::default();
        state
            .outlook_data
            .push(item(None, &format!("{}first tail", shared), Topic::Outlook));
        state
            .outlook_data
            .push(item(None, &format!("{}second tail", shared), Topic::Outlook));
        state.outlook_data.push(item(None, "short snippet", Topic::Outlook));
        state.outlook_data.push(item(None, "short snippet", Topic::Outlook));

        let state = Curation.run(state).await.unwrap();

        // The two long snippets share an 80-char prefix and collapse; the
        // identical short ones collapse too.
        assert_eq!(state.curated_evidence.len(), 2);
        assert!(state.curated_evidence[0].snippet.ends_with("first tail"));
        assert_eq!(state.curated_evidence[1].snippet, "short snippet");
    }

    #[tokio::test]
    async fn test_multibyte_snippet_key_counts_chars() {
        let mut state = ResearchState::default();
        state
            .outlook_data
            .push(item(None, &"ü".repeat(120), Topic::Outlook));

        let state = Curation.run(state).await.unwrap();
        assert_eq!(state.curated_evidence.len(), 1);
    }

    #[tokio::test]
    async fn test_bucket_walk_order_is_fixed() {
        let mut state = ResearchState::default();
        state.company_culture_data.push(item(None, "culture", Topic::CultureCareers));
        state.aum_data.push(item(None, "aum", Topic::Aum));
        state
            .fundamentals_data
            .push(item(None, "fundamentals", Topic::Fundamentals));

        let state = Curation.run(state).await.unwrap();

        let snippets: Vec<&str> = state
            .curated_evidence
            .iter()
            .map(|i| i.snippet.as_str())
            .collect();
        assert_eq!(snippets, vec!["fundamentals", "aum", "culture"]);
    }

    #[tokio::test]
    async fn test_rerun_is_idempotent() {
        let mut state = ResearchState::default();
        state
            .fundamentals_data
            .push(item(Some("https://x.com/a"), "overview", Topic::Fundamentals));
        state.aum_data.push(item(None, "aum hint", Topic::Aum));

        let once = Curation.run(state).await.unwrap();
        let twice = Curation.run(once.clone()).await.unwrap();

        assert_eq!(once.curated_evidence, twice.curated_evidence);
    }

    #[tokio::test]
    async fn test_founders_and_aspiration_buckets_not_pooled() {
        let mut state = ResearchState::default();
        state.founders_data.push(item(None, "founder bio", Topic::Founders));
        state
            .aspiration_data
            .push(item(None, "aspiration note", Topic::Aspiration));
        state
            .future_goals_data
            .push(item(None, "goal note", Topic::FutureGoals));

        let state = Curation.run(state).await.unwrap();

        // The curation walk covers eight buckets; these three are outside it.
        assert!(state.curated_evidence.is_empty());
    }
}

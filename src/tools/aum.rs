//! Manager AUM Lookup
//!
//! Second evidence source used by the AUM collector when the caller supplied
//! a With Intelligence manager id. Same failure posture as search: an
//! unconfigured or failing provider yields an empty record set.

use async_trait::async_trait;
use std::sync::Arc;

/// Manager assets-under-management lookup capability.
#[async_trait]
pub trait ManagerAumSource: Send + Sync {
    /// Fetch AUM records for one manager id. Empty when unknown or on failure.
    async fn manager_aums(&self, manager_id: i64) -> Vec<serde_json::Value>;

    /// Identifier recorded as the `source` of evidence built from records.
    fn provider_id(&self) -> &str;
}

/// With Intelligence manager AUM client.
pub struct WithIntelligenceClient {
    api_key: String,
}

impl WithIntelligenceClient {
    /// Create a client for the given key.
    pub fn new(api_key: String) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl ManagerAumSource for WithIntelligenceClient {
    async fn manager_aums(&self, manager_id: i64) -> Vec<serde_json::Value> {
        if self.api_key.is_empty() {
            tracing::warn!(
                "WITH_API_KEY not set, skipping manager AUM lookup for {}",
                manager_id
            );
            return Vec::new();
        }

        // TODO: call the With Intelligence manager AUM endpoint once API
        // access is provisioned. Returning no records keeps the collector
        // on its web-search path in the meantime.
        Vec::new()
    }

    fn provider_id(&self) -> &str {
        "with_intelligence"
    }
}

/// AUM lookup that always returns nothing.
pub struct DisabledAumSource;

#[async_trait]
impl ManagerAumSource for DisabledAumSource {
    async fn manager_aums(&self, _manager_id: i64) -> Vec<serde_json::Value> {
        Vec::new()
    }

    fn provider_id(&self) -> &str {
        "disabled"
    }
}

/// AUM provider selection for runtime configuration.
#[derive(Debug, Clone)]
pub enum AumProvider {
    /// With Intelligence API.
    WithIntelligence {
        /// API key.
        api_key: String,
    },
    /// No AUM backend.
    Disabled,
}

impl AumProvider {
    /// Build the client for this provider.
    pub fn create(&self) -> Arc<dyn ManagerAumSource> {
        match self {
            AumProvider::WithIntelligence { api_key } => {
                Arc::new(WithIntelligenceClient::new(api_key.clone()))
            }
            AumProvider::Disabled => Arc::new(DisabledAumSource),
        }
    }

    /// Human-readable provider name.
    pub fn name(&self) -> &'static str {
        match self {
            AumProvider::WithIntelligence { .. } => "WithIntelligence",
            AumProvider::Disabled => "Disabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_client_returns_empty() {
        let client = WithIntelligenceClient::new(String::new());
        assert!(client.manager_aums(42).await.is_empty());
        assert_eq!(client.provider_id(), "with_intelligence");
    }

    #[tokio::test]
    async fn test_disabled_source_returns_empty() {
        assert!(DisabledAumSource.manager_aums(7).await.is_empty());
    }

    #[test]
    fn test_provider_selection() {
        let with = AumProvider::WithIntelligence {
            api_key: "key".to_string(),
        };
        assert_eq!(with.name(), "WithIntelligence");
        assert_eq!(with.create().provider_id(), "with_intelligence");
        assert_eq!(AumProvider::Disabled.create().provider_id(), "disabled");
    }
}

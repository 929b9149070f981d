use serde::Deserialize;

use tally_api::{TopicCategory, TopicDescriptor};

use crate::error::EngineError;

/// Seed configuration — parsed from TOML.
///
/// Lets a host prime the reconciler's memo table with retention values
/// known from out-of-band reconciliation, so topics that are already in
/// the desired state never trigger a broker call.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconcilerConfig {
    /// Topic seed entries.
    #[serde(default)]
    pub topics: Vec<TopicSeed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicSeed {
    pub name: String,
    pub category: TopicCategory,
    pub retention_ms: u64,
}

impl TopicSeed {
    /// Descriptor for this seed entry, for a follow-up ensure pass.
    pub fn descriptor(&self) -> TopicDescriptor {
        TopicDescriptor::new(self.name.clone(), self.category)
    }
}

impl ReconcilerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self, EngineError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| EngineError::Config(format!("{path}: {e}")))?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(toml_str: &str) -> Result<Self, EngineError> {
        toml::from_str(toml_str).map_err(|e| EngineError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_entries() {
        let config = ReconcilerConfig::parse(
            r#"
            [[topics]]
            name = "orders"
            category = "event"
            retention_ms = 86400000

            [[topics]]
            name = "orders-errors"
            category = "error_event"
            retention_ms = 604800000
            "#,
        )
        .unwrap();

        assert_eq!(config.topics.len(), 2);
        assert_eq!(
            config.topics[0],
            TopicSeed {
                name: "orders".into(),
                category: TopicCategory::Event,
                retention_ms: 86_400_000,
            }
        );
        assert_eq!(config.topics[1].category, TopicCategory::ErrorEvent);
    }

    #[test]
    fn empty_input_defaults_to_no_topics() {
        let config = ReconcilerConfig::parse("").unwrap();
        assert!(config.topics.is_empty());
    }

    #[test]
    fn missing_retention_is_a_config_error() {
        let err = ReconcilerConfig::parse(
            r#"
            [[topics]]
            name = "orders"
            category = "event"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn unknown_category_is_a_config_error() {
        let err = ReconcilerConfig::parse(
            r#"
            [[topics]]
            name = "orders"
            category = "audit"
            retention_ms = 1000
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn seed_descriptor_carries_name_and_category() {
        let seed = TopicSeed {
            name: "invoices".into(),
            category: TopicCategory::Entity,
            retention_ms: 1_000,
        };
        let desc = seed.descriptor();
        assert_eq!(desc.name(), "invoices");
        assert_eq!(desc.category(), TopicCategory::Entity);
    }
}

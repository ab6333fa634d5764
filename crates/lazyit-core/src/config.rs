use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration carried along a lazy pipeline.
///
/// It never changes how elements flow; it only labels the pipeline for
/// logging and lets callers attach their own metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeqConfig {
    /// Pipeline label used in log records.
    #[serde(default)]
    pub name: Option<String>,

    /// Tags for filtering and categorization.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Arbitrary metadata key-value pairs.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SeqConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// The pipeline name, or `"anonymous"` when none was set.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = SeqConfig::default();
        assert!(config.name.is_none());
        assert!(config.tags.is_empty());
        assert!(config.metadata.is_empty());
        assert_eq!(config.label(), "anonymous");
    }

    #[test]
    fn builder_methods() {
        let config = SeqConfig::new()
            .with_name("doubler")
            .with_tag("test")
            .with_tag("debug")
            .with_metadata("key", serde_json::json!("value"));

        assert_eq!(config.label(), "doubler");
        assert_eq!(config.tags, vec!["test", "debug"]);
        assert_eq!(config.metadata["key"], serde_json::json!("value"));
    }

    #[test]
    fn clone_independence() {
        let config1 = SeqConfig::new().with_tag("original");
        let mut config2 = config1.clone();
        config2.tags.push("cloned".into());

        assert_eq!(config1.tags.len(), 1);
        assert_eq!(config2.tags.len(), 2);
    }

    #[test]
    fn serde_roundtrip() {
        let config = SeqConfig::new()
            .with_name("numbers")
            .with_tag("test")
            .with_metadata("foo", serde_json::json!(42));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SeqConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, config);
    }

    #[test]
    fn deserialize_with_missing_fields() {
        let config: SeqConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SeqConfig::default());
    }
}

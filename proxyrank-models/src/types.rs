//! Core types for model identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider model identifier in `vendor/model` format.
///
/// # Examples
///
/// ```
/// use proxyrank_models::ModelId;
///
/// let id = ModelId::new("openai/gpt-4o");
/// assert_eq!(id.vendor(), "openai");
/// assert_eq!(id.model(), "gpt-4o");
/// assert_eq!(id.to_string(), "openai/gpt-4o");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    /// Create a model ID from its full string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the vendor portion of the ID, or "" when there is none.
    pub fn vendor(&self) -> &str {
        self.0.split_once('/').map_or("", |(vendor, _)| vendor)
    }

    /// Get the model name portion of the ID.
    pub fn model(&self) -> &str {
        self.0.split_once('/').map_or(self.0.as_str(), |(_, model)| model)
    }

    /// Get the full ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModelId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A model queried by an experiment: a short alias and the provider ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Short name used on the command line and in reports.
    pub alias: String,
    /// Identifier sent to the provider.
    pub id: ModelId,
}

impl ModelEntry {
    /// Create a new entry.
    pub fn new(alias: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            id: ModelId::new(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_id_splits_vendor_and_model() {
        let id = ModelId::new("meta-llama/llama-3.1-70b-instruct");
        assert_eq!(id.vendor(), "meta-llama");
        assert_eq!(id.model(), "llama-3.1-70b-instruct");
    }

    #[test]
    fn model_id_without_vendor() {
        let id = ModelId::new("local-model");
        assert_eq!(id.vendor(), "");
        assert_eq!(id.model(), "local-model");
    }

    #[test]
    fn model_id_serializes_as_string() {
        let id = ModelId::new("anthropic/claude-opus-4.5");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"anthropic/claude-opus-4.5\"");
    }

    #[test]
    fn model_entry_deserializes_from_table() {
        let entry: ModelEntry =
            serde_json::from_str(r#"{"alias": "gpt-4o", "id": "openai/gpt-4o"}"#).unwrap();
        assert_eq!(entry, ModelEntry::new("gpt-4o", "openai/gpt-4o"));
    }
}

//! Catalogue of models an experiment can query.
//!
//! The catalogue keeps entries in insertion order, which is the order an
//! experiment queries them and the column order of its report.

use tracing::debug;

use crate::{Error, ModelEntry, Result};

/// Models queried by default.
pub const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("claude-opus", "anthropic/claude-opus-4.5"),
    ("gpt-4o", "openai/gpt-4o"),
    ("llama-3.1-70b", "meta-llama/llama-3.1-70b-instruct"),
];

/// Ordered alias → model ID catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelCatalog {
    entries: Vec<ModelEntry>,
}

impl ModelCatalog {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalogue.
    pub fn with_defaults() -> Self {
        Self {
            entries: DEFAULT_MODELS
                .iter()
                .map(|(alias, id)| ModelEntry::new(*alias, *id))
                .collect(),
        }
    }

    /// Build a catalogue from entries, rejecting duplicate aliases.
    pub fn from_entries(entries: impl IntoIterator<Item = ModelEntry>) -> Result<Self> {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.register(entry)?;
        }
        Ok(catalog)
    }

    /// Add an entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::DuplicateAlias` if the alias is already registered.
    pub fn register(&mut self, entry: ModelEntry) -> Result<()> {
        if self.get(&entry.alias).is_some() {
            return Err(Error::DuplicateAlias(entry.alias));
        }
        debug!(alias = %entry.alias, id = %entry.id, "registered model");
        self.entries.push(entry);
        Ok(())
    }

    /// Look up an entry by alias.
    pub fn get(&self, alias: &str) -> Option<&ModelEntry> {
        self.entries.iter().find(|e| e.alias == alias)
    }

    /// Narrow the catalogue to `aliases`, keeping the requested order.
    ///
    /// An empty selection keeps every entry.
    ///
    /// # Errors
    ///
    /// Returns `Error::ModelNotFound` for the first unknown alias.
    pub fn select(&self, aliases: &[String]) -> Result<Vec<ModelEntry>> {
        if aliases.is_empty() {
            return Ok(self.entries.clone());
        }
        aliases
            .iter()
            .map(|alias| {
                self.get(alias)
                    .cloned()
                    .ok_or_else(|| Error::ModelNotFound(alias.clone()))
            })
            .collect()
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_declared_order() {
        let catalog = ModelCatalog::with_defaults();
        let aliases: Vec<_> = catalog.iter().map(|e| e.alias.as_str()).collect();
        assert_eq!(aliases, vec!["claude-opus", "gpt-4o", "llama-3.1-70b"]);
    }

    #[test]
    fn register_rejects_duplicate_alias() {
        let mut catalog = ModelCatalog::with_defaults();
        let result = catalog.register(ModelEntry::new("gpt-4o", "openai/gpt-4o-mini"));
        assert!(matches!(result, Err(Error::DuplicateAlias(alias)) if alias == "gpt-4o"));
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn select_follows_requested_order() {
        let catalog = ModelCatalog::with_defaults();
        let selected = catalog
            .select(&["llama-3.1-70b".to_string(), "claude-opus".to_string()])
            .unwrap();
        assert_eq!(selected[0].id.as_str(), "meta-llama/llama-3.1-70b-instruct");
        assert_eq!(selected[1].id.as_str(), "anthropic/claude-opus-4.5");
    }

    #[test]
    fn select_empty_returns_all() {
        let catalog = ModelCatalog::with_defaults();
        assert_eq!(catalog.select(&[]).unwrap().len(), 3);
    }

    #[test]
    fn select_unknown_alias_fails() {
        let catalog = ModelCatalog::with_defaults();
        let err = catalog.select(&["gpt-5".to_string()]).unwrap_err();
        assert_eq!(err.to_string(), "model not found: gpt-5");
    }
}

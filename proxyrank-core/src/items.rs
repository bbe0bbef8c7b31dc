//! The fixed set of items a response is asked to rank.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single rankable item.
///
/// The label is the canonical match target. It is stored lower-cased so that
/// every comparison against lower-cased response text is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Canonical label, e.g. "pain sensitivity".
    pub label: String,
    /// Grouping shown in the prompt, e.g. "hedonistic".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// One-line explanation shown in the prompt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Create an item with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            category: None,
            description: None,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An ordered, non-empty set of distinct items.
///
/// The number of items is the upper bound of every rank: a rank is valid
/// when it lies in `1..=len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Build an item set, normalizing labels to trimmed lower case.
    ///
    /// # Errors
    ///
    /// Returns an error if the set is empty, a label is blank, or two labels
    /// are equal after normalization.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyItemSet);
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(items.len());
        for (position, mut item) in items.into_iter().enumerate() {
            let label = item.label.trim().to_lowercase();
            if label.is_empty() {
                return Err(Error::EmptyLabel(position));
            }
            if !seen.insert(label.clone()) {
                return Err(Error::DuplicateItem(label));
            }
            item.label = label;
            normalized.push(item);
        }

        Ok(Self { items: normalized })
    }

    /// Build an item set from bare labels.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels.into_iter().map(Item::new).collect())
    }

    /// The four welfare proxies: two hedonistic, two cognitive.
    pub fn welfare_proxies() -> Self {
        Self {
            items: vec![
                Item::new("pain sensitivity")
                    .with_category("hedonistic")
                    .with_description("The capacity to experience pain and suffering"),
                Item::new("emotional complexity")
                    .with_category("hedonistic")
                    .with_description("The ability to experience a range of emotions"),
                Item::new("neuron counts")
                    .with_category("cognitive")
                    .with_description("The number of neurons in the nervous system"),
                Item::new("self-awareness").with_category("cognitive").with_description(
                    "The capacity for self-recognition and awareness of one's own mental states",
                ),
            ],
        }
    }

    /// Number of items, which is also the largest valid rank.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; an item set cannot be empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Iterate over labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.label.as_str())
    }

    /// Position of a label, matched case-insensitively.
    pub fn position(&self, label: &str) -> Option<usize> {
        let label = label.trim().to_lowercase();
        self.items.iter().position(|item| item.label == label)
    }
}

impl Default for ItemSet {
    fn default() -> Self {
        Self::welfare_proxies()
    }
}

impl<'de> Deserialize<'de> for ItemSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let items = Vec::<Item>::deserialize(deserializer)?;
        ItemSet::new(items).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

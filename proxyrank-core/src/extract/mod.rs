//! Response-to-ranking extraction.
//!
//! Models rarely follow output instructions exactly, so extraction runs an
//! ordered pipeline of strategies from most to least reliable:
//!
//! ```text
//! raw text ─▶ lowercase
//!               │
//!               ├─ 1. StructuredBlock  "FINAL RANKING:" numbered list
//!               ├─ 2. InlinePrefix     "2. neuron counts" / "2) neuron counts"
//!               ├─ 3. Adjacency        "neuron counts: 2", "rank 2 ... neuron counts", "2nd"
//!               ├─ 4. OrdinalWord      "second", "least important" near the label
//!               └─ 5. MentionOrder     order of first mention fills free ranks
//!               │
//!               ▼
//!         RankingRecord
//! ```
//!
//! Each stage only fills items that are still unresolved and never overwrites
//! an earlier stage. The pipeline stops as soon as every item has a rank, so a
//! complete structured block is taken verbatim.
//!
//! Extraction never fails. Text that yields nothing produces a record with
//! every item unresolved, and callers decide what counts as a failed trial.

mod adjacency;
mod block;
mod inline;
mod mention;
mod ordinal;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{ItemSet, Rank, RankingRecord, Result};

pub use adjacency::{ADJACENCY_PATTERNS, AdjacencyPattern};
pub use ordinal::{ORDINAL_WINDOW_CHARS, ORDINAL_WORDS};

/// An extraction stage, in pipeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Numbered list under a "final ranking" heading.
    StructuredBlock,
    /// A number and `.` or `)` directly before the label.
    InlinePrefix,
    /// Label and number joined by punctuation, "rank", or an ordinal suffix.
    Adjacency,
    /// Ordinal or superlative words near the first mention.
    OrdinalWord,
    /// Order of first mention assigns the remaining ranks.
    MentionOrder,
}

impl Strategy {
    /// All strategies in the order the pipeline runs them.
    pub const ALL: [Strategy; 5] = [
        Strategy::StructuredBlock,
        Strategy::InlinePrefix,
        Strategy::Adjacency,
        Strategy::OrdinalWord,
        Strategy::MentionOrder,
    ];

    /// Stable snake_case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::StructuredBlock => "structured_block",
            Strategy::InlinePrefix => "inline_prefix",
            Strategy::Adjacency => "adjacency",
            Strategy::OrdinalWord => "ordinal_word",
            Strategy::MentionOrder => "mention_order",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Working state threaded through the pipeline.
#[derive(Debug, Clone)]
struct PartialRanking {
    ranks: Vec<Option<Rank>>,
    sources: Vec<Option<Strategy>>,
}

impl PartialRanking {
    fn new(len: usize) -> Self {
        Self {
            ranks: vec![None; len],
            sources: vec![None; len],
        }
    }

    fn is_resolved(&self, index: usize) -> bool {
        self.ranks[index].is_some()
    }

    /// Bind a rank unless the item already has one.
    fn resolve(&mut self, index: usize, rank: Rank, strategy: Strategy) {
        if self.ranks[index].is_none() {
            self.ranks[index] = Some(rank);
            self.sources[index] = Some(strategy);
        }
    }

    fn unresolved(&self) -> impl Iterator<Item = usize> + '_ {
        self.ranks
            .iter()
            .enumerate()
            .filter(|(_, rank)| rank.is_none())
            .map(|(index, _)| index)
    }

    fn resolved_count(&self) -> usize {
        self.ranks.iter().filter(|rank| rank.is_some()).count()
    }

    fn is_complete(&self) -> bool {
        self.ranks.iter().all(Option::is_some)
    }

    fn used_ranks(&self) -> impl Iterator<Item = Rank> + '_ {
        self.ranks.iter().flatten().copied()
    }
}

/// Result of an extraction together with the stage that resolved each item.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The extracted ranking.
    pub record: RankingRecord,
    /// Resolving strategy per item, aligned with the item set.
    pub sources: Vec<Option<Strategy>>,
}

impl Extraction {
    /// Iterate over `(label, rank, strategy)` in item-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Rank>, Option<Strategy>)> {
        self.record
            .iter()
            .zip(self.sources.iter())
            .map(|((label, rank), source)| (label, rank, *source))
    }

    /// The strategy that resolved a label, if any.
    pub fn source_of(&self, label: &str) -> Option<Strategy> {
        let label = label.trim().to_lowercase();
        self.iter()
            .find(|(l, _, _)| *l == label)
            .and_then(|(_, _, source)| source)
    }
}

/// Turns free-form model output into a [`RankingRecord`] for a fixed item set.
///
/// Label-specific patterns are compiled once at construction, so a single
/// extractor can be reused for every trial and shared across threads.
///
/// # Example
///
/// ```
/// use proxyrank_core::{ItemSet, RankingExtractor};
///
/// let extractor = RankingExtractor::new(ItemSet::welfare_proxies()).unwrap();
/// let record = extractor.extract(Some(
///     "FINAL RANKING:\n1. Pain sensitivity\n2. Emotional complexity\n3. Self-awareness\n4. Neuron counts\n",
/// ));
///
/// assert_eq!(record.get("self-awareness").map(|r| r.get()), Some(3));
/// ```
#[derive(Debug, Clone)]
pub struct RankingExtractor {
    items: ItemSet,
    block: block::BlockMatcher,
    inline: inline::InlineMatcher,
    adjacency: adjacency::AdjacencyMatcher,
}

impl RankingExtractor {
    /// Create an extractor for `items`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Pattern`] if a label-derived pattern exceeds the
    /// regex engine's size limits.
    pub fn new(items: ItemSet) -> Result<Self> {
        let block = block::BlockMatcher::new()?;
        let inline = inline::InlineMatcher::new(&items)?;
        let adjacency = adjacency::AdjacencyMatcher::new(&items)?;
        Ok(Self {
            items,
            block,
            inline,
            adjacency,
        })
    }

    /// The item set this extractor ranks.
    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    /// Extract a ranking record from `text`.
    ///
    /// Absent or empty text yields a record with every item unresolved.
    pub fn extract(&self, text: Option<&str>) -> RankingRecord {
        self.extract_with_provenance(text).record
    }

    /// Extract a ranking record and report which strategy resolved each item.
    pub fn extract_with_provenance(&self, text: Option<&str>) -> Extraction {
        let mut partial = PartialRanking::new(self.items.len());

        if let Some(text) = text.filter(|t| !t.is_empty()) {
            let lowered = text.to_lowercase();
            for strategy in Strategy::ALL {
                let before = partial.resolved_count();
                partial = self.apply(strategy, &lowered, partial);
                trace!(
                    strategy = %strategy,
                    newly_resolved = partial.resolved_count() - before,
                    "extraction stage finished"
                );
                if partial.is_complete() {
                    debug!(strategy = %strategy, "all items resolved");
                    break;
                }
            }
        }

        Extraction {
            record: RankingRecord::from_ranks(&self.items, partial.ranks),
            sources: partial.sources,
        }
    }

    fn apply(&self, strategy: Strategy, text: &str, partial: PartialRanking) -> PartialRanking {
        match strategy {
            Strategy::StructuredBlock => self.block.resolve(text, &self.items, partial),
            Strategy::InlinePrefix => self.inline.resolve(text, self.items.len(), partial),
            Strategy::Adjacency => self.adjacency.resolve(text, self.items.len(), partial),
            Strategy::OrdinalWord => ordinal::resolve(text, &self.items, partial),
            Strategy::MentionOrder => mention::resolve(text, &self.items, partial),
        }
    }
}

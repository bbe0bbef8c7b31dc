//! Numbered-list prefix anywhere in the text: `2. neuron counts`, `2) neuron counts`.

use regex::Regex;

use super::{PartialRanking, Strategy};
use crate::{ItemSet, Rank, Result};

#[derive(Debug, Clone)]
pub(super) struct InlineMatcher {
    /// One pattern per item, aligned with the item set.
    patterns: Vec<Regex>,
}

impl InlineMatcher {
    pub(super) fn new(items: &ItemSet) -> Result<Self> {
        let patterns = items
            .labels()
            .map(|label| Regex::new(&format!(r"([0-9]+)[.)]\s*{}", regex::escape(label))))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Only the first occurrence is considered; an out-of-range number there
    /// leaves the item for later stages.
    pub(super) fn resolve(
        &self,
        text: &str,
        max_rank: usize,
        mut partial: PartialRanking,
    ) -> PartialRanking {
        let pending: Vec<usize> = partial.unresolved().collect();
        for index in pending {
            let rank = self.patterns[index]
                .captures(text)
                .and_then(|caps| Rank::parse(&caps[1], max_rank));
            if let Some(rank) = rank {
                partial.resolve(index, rank, Strategy::InlinePrefix);
            }
        }
        partial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Option<u32>> {
        let items = ItemSet::welfare_proxies();
        let matcher = InlineMatcher::new(&items).unwrap();
        let partial = matcher.resolve(&text.to_lowercase(), items.len(), PartialRanking::new(4));
        partial.ranks.iter().map(|r| r.map(Rank::get)).collect()
    }

    #[test]
    fn dot_and_paren_delimiters() {
        let text = "My order: 3. Neuron counts, then 4) self-awareness.";
        assert_eq!(run(text), vec![None, None, Some(3), Some(4)]);
    }

    #[test]
    fn whitespace_between_delimiter_and_label_is_optional() {
        assert_eq!(run("1.pain sensitivity"), vec![Some(1), None, None, None]);
    }

    #[test]
    fn first_occurrence_decides_even_when_out_of_range() {
        let text = "7. pain sensitivity is discussed below.\n1. pain sensitivity";
        assert_eq!(run(text), vec![None; 4]);
    }

    #[test]
    fn resolved_items_are_left_alone() {
        let items = ItemSet::welfare_proxies();
        let matcher = InlineMatcher::new(&items).unwrap();
        let mut partial = PartialRanking::new(4);
        partial.resolve(0, Rank::new(4, 4).unwrap(), Strategy::StructuredBlock);

        let partial = matcher.resolve("1. pain sensitivity", 4, partial);

        assert_eq!(partial.ranks[0].map(Rank::get), Some(4));
        assert_eq!(partial.sources[0], Some(Strategy::StructuredBlock));
    }
}

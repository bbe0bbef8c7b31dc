//! Structured "FINAL RANKING:" block.
//!
//! The prompt asks for a boxed numbered list under a fixed heading. When the
//! model complies this is the most reliable signal in the response.

use regex::Regex;

use super::{PartialRanking, Strategy};
use crate::{ItemSet, Rank, Result};

/// Heading followed by a newline and a run of `<n>. <text>` lines.
const SECTION_PATTERN: &str = r"final\s+ranking:?\s*\n((?:[0-9]+\.\s*[^\n]+\n?)+)";

/// One numbered line inside the section.
const LINE_PATTERN: &str = r"([0-9]+)\.\s*([^\n]+)";

#[derive(Debug, Clone)]
pub(super) struct BlockMatcher {
    section: Regex,
    line: Regex,
}

impl BlockMatcher {
    pub(super) fn new() -> Result<Self> {
        Ok(Self {
            section: Regex::new(SECTION_PATTERN)?,
            line: Regex::new(LINE_PATTERN)?,
        })
    }

    /// Bind each numbered line to the first still-unmatched label it contains.
    pub(super) fn resolve(
        &self,
        text: &str,
        items: &ItemSet,
        mut partial: PartialRanking,
    ) -> PartialRanking {
        let Some(section) = self.section.captures(text).and_then(|c| c.get(1)) else {
            return partial;
        };

        for line in self.line.captures_iter(section.as_str()) {
            let Some(rank) = Rank::parse(&line[1], items.len()) else {
                continue;
            };
            let entry = &line[2];
            let label_index = items
                .labels()
                .enumerate()
                .find(|(index, label)| !partial.is_resolved(*index) && entry.contains(label))
                .map(|(index, _)| index);

            if let Some(index) = label_index {
                partial.resolve(index, rank, Strategy::StructuredBlock);
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
        let matcher = BlockMatcher::new().unwrap();
        let partial = matcher.resolve(&text.to_lowercase(), &items, PartialRanking::new(4));
        partial.ranks.iter().map(|r| r.map(Rank::get)).collect()
    }

    #[test]
    fn reads_boxed_block() {
        let text = "\
Some reasoning first.

---
FINAL RANKING:
1. Pain sensitivity
2. Emotional complexity
3. Self-awareness
4. Neuron counts
---
";
        assert_eq!(run(text), vec![Some(1), Some(2), Some(4), Some(3)]);
    }

    #[test]
    fn heading_colon_is_optional() {
        let text = "Final Ranking\n1. neuron counts\n2. self-awareness\n";
        assert_eq!(run(text), vec![None, None, Some(1), Some(2)]);
    }

    #[test]
    fn lines_may_carry_extra_text() {
        let text = "FINAL RANKING:\n1. Pain sensitivity (the capacity to suffer)\n2. [Self-awareness]\n";
        assert_eq!(run(text), vec![Some(1), None, None, Some(2)]);
    }

    #[test]
    fn out_of_range_numbers_are_skipped() {
        let text = "FINAL RANKING:\n0. pain sensitivity\n5. neuron counts\n1. self-awareness\n";
        assert_eq!(run(text), vec![None, None, None, Some(1)]);
    }

    #[test]
    fn matched_label_is_not_rebound_by_a_later_line() {
        let text = "FINAL RANKING:\n1. pain sensitivity\n2. pain sensitivity and emotional complexity\n";
        assert_eq!(run(text), vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn heading_without_list_resolves_nothing() {
        let text = "My final ranking: pain sensitivity first.";
        assert_eq!(run(text), vec![None; 4]);
    }

    #[test]
    fn block_ends_at_first_non_numbered_line() {
        let text = "FINAL RANKING:\n1. pain sensitivity\n---\n2. neuron counts\n";
        assert_eq!(run(text), vec![Some(1), None, None, None]);
    }
}

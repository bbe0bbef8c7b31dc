//! Label and number joined by local text.
//!
//! Patterns are tried per item in table order. The first pattern whose first
//! match carries an in-range number wins; an out-of-range number moves on to
//! the next pattern. `.` does not cross line breaks, so every pattern stays
//! within a single line.

use regex::Regex;

use super::{PartialRanking, Strategy};
use crate::{ItemSet, Rank, Result};

/// An adjacency pattern. `{label}` in the template is replaced by the escaped
/// item label; capture group 1 is the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjacencyPattern {
    pub name: &'static str,
    pub template: &'static str,
}

/// Adjacency patterns in priority order.
pub const ADJACENCY_PATTERNS: &[AdjacencyPattern] = &[
    AdjacencyPattern {
        name: "label_delimiter_number",
        template: r"{label}[:\-]\s*([0-9]+)",
    },
    AdjacencyPattern {
        name: "label_parenthesized_number",
        template: r"{label}\s*\(([0-9]+)\)",
    },
    AdjacencyPattern {
        name: "number_delimiter_label",
        template: r"([0-9]+)[:\-]\s*{label}",
    },
    AdjacencyPattern {
        name: "label_then_rank",
        template: r"{label}.*?rank[:\s]+([0-9]+)",
    },
    AdjacencyPattern {
        name: "rank_then_label",
        template: r"rank[:\s]+([0-9]+).*?{label}",
    },
    AdjacencyPattern {
        name: "label_then_ordinal_suffix",
        template: r"{label}.*?([0-9]+)(?:\s*st|\s*nd|\s*rd|\s*th)",
    },
];

impl AdjacencyPattern {
    fn compile(&self, label: &str) -> std::result::Result<Regex, regex::Error> {
        Regex::new(&self.template.replace("{label}", &regex::escape(label)))
    }
}

#[derive(Debug, Clone)]
pub(super) struct AdjacencyMatcher {
    /// Per item, the compiled table in priority order.
    patterns: Vec<Vec<Regex>>,
}

impl AdjacencyMatcher {
    pub(super) fn new(items: &ItemSet) -> Result<Self> {
        let patterns = items
            .labels()
            .map(|label| {
                ADJACENCY_PATTERNS
                    .iter()
                    .map(|pattern| pattern.compile(label))
                    .collect::<std::result::Result<Vec<_>, _>>()
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub(super) fn resolve(
        &self,
        text: &str,
        max_rank: usize,
        mut partial: PartialRanking,
    ) -> PartialRanking {
        let pending: Vec<usize> = partial.unresolved().collect();
        for index in pending {
            let rank = self.patterns[index].iter().find_map(|pattern| {
                pattern
                    .captures(text)
                    .and_then(|caps| Rank::parse(&caps[1], max_rank))
            });
            if let Some(rank) = rank {
                partial.resolve(index, rank, Strategy::Adjacency);
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
        let matcher = AdjacencyMatcher::new(&items).unwrap();
        let partial = matcher.resolve(&text.to_lowercase(), items.len(), PartialRanking::new(4));
        partial.ranks.iter().map(|r| r.map(Rank::get)).collect()
    }

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<_> = ADJACENCY_PATTERNS.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec![
                "label_delimiter_number",
                "label_parenthesized_number",
                "number_delimiter_label",
                "label_then_rank",
                "rank_then_label",
                "label_then_ordinal_suffix",
            ]
        );
    }

    #[test]
    fn label_followed_by_colon_or_dash() {
        let text = "Pain sensitivity: 1\nEmotional complexity-2";
        assert_eq!(run(text), vec![Some(1), Some(2), None, None]);
    }

    #[test]
    fn label_followed_by_parenthesized_number() {
        assert_eq!(run("neuron counts (4)"), vec![None, None, Some(4), None]);
    }

    #[test]
    fn number_then_delimiter_then_label() {
        assert_eq!(run("3: self-awareness"), vec![None, None, None, Some(3)]);
    }

    #[test]
    fn rank_keyword_on_either_side() {
        let text = "Neuron counts get rank 4.\nAt rank: 2 I place emotional complexity.";
        assert_eq!(run(text), vec![None, Some(2), Some(4), None]);
    }

    #[test]
    fn ordinal_suffix_after_label() {
        let text = "pain sensitivity is the 1st most important factor";
        assert_eq!(run(text), vec![Some(1), None, None, None]);
    }

    #[test]
    fn out_of_range_number_tries_next_pattern() {
        // "neuron counts: 10" is out of range; the parenthesized form still applies.
        let text = "neuron counts: 10 (see below)\nneuron counts (3)";
        assert_eq!(run(text), vec![None, None, Some(3), None]);
    }

    #[test]
    fn patterns_do_not_cross_lines() {
        let text = "self-awareness matters\n2nd point: something else";
        assert_eq!(run(text), vec![None; 4]);
    }

    #[test]
    fn label_with_regex_metacharacters_is_escaped() {
        let items = ItemSet::from_labels(["c++ (lang)", "go"]).unwrap();
        let matcher = AdjacencyMatcher::new(&items).unwrap();
        let partial = matcher.resolve("c++ (lang): 2", items.len(), PartialRanking::new(2));
        assert_eq!(partial.ranks[0].map(Rank::get), Some(2));
    }
}

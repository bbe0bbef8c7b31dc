//! Ordinal and superlative words near an item's first mention.

use super::{PartialRanking, Strategy};
use crate::{ItemSet, Rank};

/// Characters inspected on each side of the first mention.
pub const ORDINAL_WINDOW_CHARS: usize = 50;

/// Words and the rank they imply, in priority order.
///
/// Matching is plain substring search, so the first entry present anywhere
/// in the window wins even if another entry appears closer to the label.
pub const ORDINAL_WORDS: &[(&str, u32)] = &[
    ("first", 1),
    ("most important", 1),
    ("highest", 1),
    ("primary", 1),
    ("second", 2),
    ("second most", 2),
    ("third", 3),
    ("fourth", 4),
    ("least important", 4),
    ("lowest", 4),
    ("last", 4),
];

pub(super) fn resolve(text: &str, items: &ItemSet, mut partial: PartialRanking) -> PartialRanking {
    let labels: Vec<&str> = items.labels().collect();
    let pending: Vec<usize> = partial.unresolved().collect();

    for index in pending {
        let label = labels[index];
        let Some(start) = text.find(label) else {
            continue;
        };
        let window = window_around(text, start, start + label.len());

        let rank = ORDINAL_WORDS
            .iter()
            .filter(|(word, _)| window.contains(*word))
            .find_map(|(_, rank)| Rank::new(*rank, items.len()));
        if let Some(rank) = rank {
            partial.resolve(index, rank, Strategy::OrdinalWord);
        }
    }

    partial
}

/// Slice of `text` from `ORDINAL_WINDOW_CHARS` characters before `start` to
/// the same number after `end`, clamped to the text.
fn window_around(text: &str, start: usize, end: usize) -> &str {
    let from = text[..start]
        .char_indices()
        .rev()
        .nth(ORDINAL_WINDOW_CHARS - 1)
        .map_or(0, |(offset, _)| offset);
    let to = text[end..]
        .char_indices()
        .nth(ORDINAL_WINDOW_CHARS)
        .map_or(text.len(), |(offset, _)| end + offset);
    &text[from..to]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> Vec<Option<u32>> {
        let items = ItemSet::welfare_proxies();
        let partial = resolve(&text.to_lowercase(), &items, PartialRanking::new(4));
        partial.ranks.iter().map(|r| r.map(Rank::get)).collect()
    }

    #[test]
    fn table_order_is_fixed() {
        let words: Vec<_> = ORDINAL_WORDS.iter().map(|(word, _)| *word).collect();
        assert_eq!(
            words,
            vec![
                "first",
                "most important",
                "highest",
                "primary",
                "second",
                "second most",
                "third",
                "fourth",
                "least important",
                "lowest",
                "last"
            ]
        );
    }

    #[test]
    fn ordinal_after_label() {
        assert_eq!(
            run("Neuron counts come third in my view."),
            vec![None, None, Some(3), None]
        );
    }

    #[test]
    fn superlative_before_label() {
        assert_eq!(
            run("The least important factor is self-awareness."),
            vec![None, None, None, Some(4)]
        );
    }

    #[test]
    fn table_order_beats_proximity() {
        // "first" is further away than "second" but earlier in the table.
        let text = "First, some context. Second comes pain sensitivity.";
        assert_eq!(run(text), vec![Some(1), None, None, None]);
    }

    #[test]
    fn words_outside_window_are_ignored() {
        let padding = "x".repeat(60);
        let text = format!("first {padding} pain sensitivity {padding} last");
        assert_eq!(run(&text), vec![None; 4]);
    }

    #[test]
    fn window_is_measured_in_characters() {
        // 46 characters but 86 bytes precede the label.
        let text = format!("first{} pain sensitivity", "é".repeat(40));
        assert_eq!(run(&text), vec![Some(1), None, None, None]);
    }

    #[test]
    fn window_clamps_to_text_bounds() {
        let text = "pain sensitivity";
        assert_eq!(window_around(text, 0, text.len()), text);
    }

    #[test]
    fn table_ranks_above_item_count_are_skipped() {
        let items = ItemSet::from_labels(["alpha", "beta"]).unwrap();
        let partial = resolve("alpha is third, beta", &items, PartialRanking::new(2));
        assert!(partial.ranks.iter().all(Option::is_none));
    }
}

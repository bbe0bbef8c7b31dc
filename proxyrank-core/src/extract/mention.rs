//! Last-resort fallback: order of first mention.
//!
//! Remaining items that appear in the text are sorted by first occurrence and
//! given the ranks no resolved item uses, lowest first. Ranks are not
//! normalized: duplicates from earlier stages are kept and items missing from
//! the text stay unresolved, so the record need not be a permutation.

use super::{PartialRanking, Strategy};
use crate::{ItemSet, Rank};

pub(super) fn resolve(text: &str, items: &ItemSet, mut partial: PartialRanking) -> PartialRanking {
    let labels: Vec<&str> = items.labels().collect();

    let mut mentioned: Vec<(usize, usize)> = partial
        .unresolved()
        .filter_map(|index| text.find(labels[index]).map(|position| (index, position)))
        .collect();
    if mentioned.is_empty() {
        return partial;
    }
    // Stable, so labels found at the same offset keep item-set order.
    mentioned.sort_by_key(|(_, position)| *position);

    let used: Vec<Rank> = partial.used_ranks().collect();
    let available = (1..=items.len() as u32)
        .filter_map(|value| Rank::new(value, items.len()))
        .filter(|rank| !used.contains(rank));

    for ((index, _), rank) in mentioned.into_iter().zip(available) {
        partial.resolve(index, rank, Strategy::MentionOrder);
    }

    partial
}

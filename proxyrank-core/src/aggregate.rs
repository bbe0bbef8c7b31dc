//! Per-item averaging across repeated trials.

use crate::{AverageRanking, ItemSet, Rank, RankingRecord};

/// Average each item's rank over the records that resolved it.
///
/// Unresolved entries contribute to neither the sum nor the count, so two
/// items in the same result may be divided by different counts. An item no
/// record resolved is unresolved in the output, and an empty slice yields an
/// all-unresolved average. No rounding is applied.
pub fn aggregate(items: &ItemSet, records: &[RankingRecord]) -> AverageRanking {
    let means = items
        .labels()
        .map(|label| {
            let (sum, count) = records
                .iter()
                .filter_map(|record| record.get(label))
                .fold((0u64, 0u64), |(sum, count), rank: Rank| {
                    (sum + u64::from(rank.get()), count + 1)
                });
            (count > 0).then(|| sum as f64 / count as f64)
        })
        .collect();

    AverageRanking::from_means(items, means)
}

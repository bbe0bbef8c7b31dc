//! Ranking records and average rankings.
//!
//! Both are label-keyed maps whose values may be unresolved. They serialize
//! as JSON objects in item-set order, with `null` for unresolved entries:
//!
//! ```text
//! {"pain sensitivity": 1, "emotional complexity": 2, "neuron counts": null, ...}
//! ```

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ItemSet;

/// A rank in `1..=N`, where `N` is the size of the item set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rank(u32);

impl Rank {
    /// Create a rank if `value` lies in `1..=max`.
    pub fn new(value: u32, max: usize) -> Option<Self> {
        (value >= 1 && value as usize <= max).then_some(Self(value))
    }

    /// Parse a decimal rank if it lies in `1..=max`.
    ///
    /// Numbers too large to represent are treated like any other
    /// out-of-range value.
    pub fn parse(digits: &str, max: usize) -> Option<Self> {
        digits.parse::<u32>().ok().and_then(|value| Self::new(value, max))
    }

    /// The numeric rank.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered mapping from label to an optional value.
#[derive(Debug, Clone, PartialEq)]
struct LabelMap<T> {
    entries: Vec<(String, Option<T>)>,
}

impl<T: Copy> LabelMap<T> {
    fn get(&self, label: &str) -> Option<T> {
        let label = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .and_then(|(_, value)| *value)
    }

    fn iter(&self) -> impl Iterator<Item = (&str, Option<T>)> {
        self.entries.iter().map(|(l, value)| (l.as_str(), *value))
    }
}

impl<T: Serialize> Serialize for LabelMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LabelMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LabelMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for LabelMapVisitor<T> {
            type Value = LabelMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from item label to value or null")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, Option<T>>()? {
                    entries.push((label.to_lowercase(), value));
                }
                Ok(LabelMap { entries })
            }
        }

        deserializer.deserialize_map(LabelMapVisitor(PhantomData))
    }
}

/// One trial's extracted ranking: each item maps to a rank or is unresolved.
///
/// Ranks are not required to form a permutation; two items may share a rank
/// when the source text was inconsistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingRecord(LabelMap<Rank>);

impl RankingRecord {
    /// Build a record from per-item ranks aligned with `items`.
    pub(crate) fn from_ranks(items: &ItemSet, ranks: Vec<Option<Rank>>) -> Self {
        debug_assert_eq!(items.len(), ranks.len());
        Self(LabelMap {
            entries: items.labels().map(str::to_string).zip(ranks).collect(),
        })
    }

    /// A record with every item unresolved.
    pub fn unresolved(items: &ItemSet) -> Self {
        Self::from_ranks(items, vec![None; items.len()])
    }

    /// Build a record from explicit label/rank pairs.
    ///
    /// Ranks outside `1..=items.len()` and labels not in `items` are dropped;
    /// items without a pair are unresolved.
    pub fn from_pairs<'a>(
        items: &ItemSet,
        pairs: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Self {
        let mut ranks = vec![None; items.len()];
        for (label, value) in pairs {
            if let Some(index) = items.position(label) {
                ranks[index] = Rank::new(value, items.len());
            }
        }
        Self::from_ranks(items, ranks)
    }

    /// Rank of a label, or `None` when unresolved or unknown.
    pub fn get(&self, label: &str) -> Option<Rank> {
        self.0.get(label)
    }

    /// Iterate over `(label, rank)` pairs in item-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Rank>)> {
        self.0.iter()
    }

    /// Number of items that received a rank.
    pub fn resolved_count(&self) -> usize {
        self.iter().filter(|(_, rank)| rank.is_some()).count()
    }

    /// Labels that did not receive a rank.
    pub fn unresolved_labels(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, rank)| rank.is_none())
            .map(|(label, _)| label)
            .collect()
    }

    /// True when every item received a rank.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, rank)| rank.is_some())
    }

    /// True when ranks are a permutation of `1..=N`.
    pub fn is_permutation(&self) -> bool {
        let mut ranks: Vec<u32> = self.iter().filter_map(|(_, r)| r.map(Rank::get)).collect();
        if ranks.len() != self.0.entries.len() {
            return false;
        }
        ranks.sort_unstable();
        ranks.iter().enumerate().all(|(i, r)| *r as usize == i + 1)
    }
}

/// Per-item mean rank across one model's records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AverageRanking(LabelMap<f64>);

impl AverageRanking {
    pub(crate) fn from_means(items: &ItemSet, means: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(items.len(), means.len());
        Self(LabelMap {
            entries: items.labels().map(str::to_string).zip(means).collect(),
        })
    }

    /// Mean rank of a label, or `None` when no record resolved it.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label)
    }

    /// Iterate over `(label, mean)` pairs in item-set order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> ItemSet {
        ItemSet::welfare_proxies()
    }

    #[test]
    fn rank_new_validates_range() {
        assert!(Rank::new(0, 4).is_none());
        assert_eq!(Rank::new(1, 4).map(Rank::get), Some(1));
        assert_eq!(Rank::new(4, 4).map(Rank::get), Some(4));
        assert!(Rank::new(5, 4).is_none());
    }

    #[test]
    fn rank_parse_rejects_overflow() {
        assert!(Rank::parse("99999999999999999999", 4).is_none());
        assert_eq!(Rank::parse("3", 4).map(Rank::get), Some(3));
    }

    #[test]
    fn from_pairs_ignores_unknown_labels_and_bad_ranks() {
        let record = RankingRecord::from_pairs(
            &items(),
            [("Pain Sensitivity", 2), ("whiskers", 1), ("neuron counts", 9)],
        );

        assert_eq!(record.get("pain sensitivity").map(Rank::get), Some(2));
        assert!(record.get("neuron counts").is_none());
        assert_eq!(record.resolved_count(), 1);
        assert_eq!(
            record.unresolved_labels(),
            vec!["emotional complexity", "neuron counts", "self-awareness"]
        );
    }

    #[test]
    fn permutation_check_detects_duplicates() {
        let full = RankingRecord::from_pairs(
            &items(),
            [
                ("pain sensitivity", 2),
                ("emotional complexity", 1),
                ("neuron counts", 4),
                ("self-awareness", 3),
            ],
        );
        assert!(full.is_complete());
        assert!(full.is_permutation());

        let duplicated = RankingRecord::from_pairs(
            &items(),
            [
                ("pain sensitivity", 1),
                ("emotional complexity", 1),
                ("neuron counts", 4),
                ("self-awareness", 3),
            ],
        );
        assert!(duplicated.is_complete());
        assert!(!duplicated.is_permutation());
    }

    #[test]
    fn record_serializes_in_item_order_with_nulls() {
        let record = RankingRecord::from_pairs(&items(), [("neuron counts", 3)]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"pain sensitivity":null,"emotional complexity":null,"neuron counts":3,"self-awareness":null}"#
        );

        let parsed: RankingRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}

//! End-to-end behaviour of the extractor and aggregator on realistic responses.

use proxyrank_core::{ItemSet, RankingExtractor, RankingRecord, Strategy, aggregate};

fn extractor() -> RankingExtractor {
    RankingExtractor::new(ItemSet::welfare_proxies()).unwrap()
}

fn ranks(record: &RankingRecord) -> Vec<Option<u32>> {
    record.iter().map(|(_, rank)| rank.map(|r| r.get())).collect()
}

#[test]
fn final_ranking_block_wins_over_earlier_prose() {
    let text = "\
I think self-awareness is the most important factor, and neuron counts come first
for some researchers.

---
FINAL RANKING:
1. Pain sensitivity
2. Emotional complexity
3. Self-awareness
4. Neuron counts
---";

    let extraction = extractor().extract_with_provenance(Some(text));

    assert_eq!(ranks(&extraction.record), vec![Some(1), Some(2), Some(4), Some(3)]);
    assert!(
        extraction
            .iter()
            .all(|(_, _, source)| source == Some(Strategy::StructuredBlock))
    );
    assert!(extraction.record.is_permutation());
}

#[test]
fn empty_and_absent_text_are_fully_unresolved() {
    let extractor = extractor();
    for text in [None, Some("")] {
        let record = extractor.extract(text);
        assert_eq!(record.resolved_count(), 0);
        assert_eq!(record.unresolved_labels().len(), 4);
    }
}

#[test]
fn ordinal_suffix_resolves_single_item() {
    let record = extractor().extract(Some("pain sensitivity is the 1st most important factor"));

    assert_eq!(record.get("pain sensitivity").map(|r| r.get()), Some(1));
    assert_eq!(record.resolved_count(), 1);
}

#[test]
fn mention_order_ranks_unnumbered_prose() {
    let text = "Self-awareness seems central to me. Neuron counts are a rough signal. \
                Pain sensitivity matters too, as does emotional complexity.";
    let extraction = extractor().extract_with_provenance(Some(text));

    assert_eq!(
        extraction.record.get("self-awareness").map(|r| r.get()),
        Some(1)
    );
    assert_eq!(extraction.record.get("neuron counts").map(|r| r.get()), Some(2));
    assert_eq!(
        extraction.record.get("pain sensitivity").map(|r| r.get()),
        Some(3)
    );
    assert_eq!(
        extraction.record.get("emotional complexity").map(|r| r.get()),
        Some(4)
    );
    assert_eq!(
        extraction.source_of("Self-Awareness"),
        Some(Strategy::MentionOrder)
    );
}

#[test]
fn out_of_range_numbers_are_never_bound() {
    let text = "7. Pain sensitivity\n0. Emotional complexity\n99999999999. Neuron counts";
    let extraction = extractor().extract_with_provenance(Some(text));

    for (_, rank, source) in extraction.iter() {
        if let Some(rank) = rank {
            assert!((1..=4).contains(&rank.get()));
            assert_ne!(source, Some(Strategy::InlinePrefix));
        }
    }
}

#[test]
fn uppercase_response_matches_lowercase_labels() {
    let text = "FINAL RANKING:\n1. NEURON COUNTS\n2. SELF-AWARENESS\n3. PAIN SENSITIVITY\n4. EMOTIONAL COMPLEXITY\n";
    let record = extractor().extract(Some(text));

    assert_eq!(ranks(&record), vec![Some(3), Some(4), Some(1), Some(2)]);
}

#[test]
fn extraction_is_deterministic() {
    let extractor = extractor();
    let text = "Pain sensitivity (2), then self-awareness ranked 1; neuron counts last.";

    assert_eq!(extractor.extract(Some(text)), extractor.extract(Some(text)));
}

#[test]
fn averages_follow_extracted_records() {
    let extractor = extractor();
    let responses = [
        "FINAL RANKING:\n1. Pain sensitivity\n2. Emotional complexity\n3. Self-awareness\n4. Neuron counts\n",
        "FINAL RANKING:\n1. Emotional complexity\n2. Pain sensitivity\n3. Self-awareness\n4. Neuron counts\n",
        "I can't rank these.",
    ];
    let records: Vec<_> = responses
        .iter()
        .map(|text| extractor.extract(Some(*text)))
        .collect();

    let average = aggregate(extractor.items(), &records);

    assert_eq!(average.get("pain sensitivity"), Some(1.5));
    assert_eq!(average.get("emotional complexity"), Some(1.5));
    assert_eq!(average.get("self-awareness"), Some(3.0));
    assert_eq!(average.get("neuron counts"), Some(4.0));
}

#[test]
fn aggregate_examples() {
    let items = ItemSet::from_labels(["a", "b"]).unwrap();

    let single = aggregate(&items, &[RankingRecord::from_pairs(&items, [("a", 2)])]);
    assert_eq!(single.get("a"), Some(2.0));
    assert_eq!(single.get("b"), None);

    let mixed = aggregate(
        &items,
        &[
            RankingRecord::from_pairs(&items, [("a", 1), ("b", 2)]),
            RankingRecord::from_pairs(&items, [("a", 3)]),
        ],
    );
    assert_eq!(mixed.get("a"), Some(2.0));
    assert_eq!(mixed.get("b"), Some(2.0));

    let empty = aggregate(&items, &[]);
    assert_eq!(empty.get("a"), None);
    assert_eq!(empty.get("b"), None);
}

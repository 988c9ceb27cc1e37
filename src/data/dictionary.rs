// ============================================================
// Layer 4 — Dictionary Builder
// ============================================================
// Folds a token pool into a single Vocabulary.
//
// Scan order: classes in the given order, then documents in
// pool order, then tokens in document order. A token's index
// is fixed by where this scan first meets it, so identical
// inputs always give identical indices.

use crate::data::token_pool::TokenPool;
use crate::domain::vocabulary::Vocabulary;

/// Build the vocabulary of `pool`, visiting `classes` in order.
/// Classes absent from the pool contribute nothing.
pub fn build_dictionary(classes: &[String], pool: &TokenPool) -> Vocabulary {
    let mut vocab = Vocabulary::new();

    for class in classes {
        for doc in pool.documents(class) {
            for token in doc {
                vocab.observe(token, class);
            }
        }
    }

    tracing::info!("Dictionary built with {} distinct tokens", vocab.len());
    vocab
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn doc(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|c| c.to_string()).collect()
    }

    fn sample_pool() -> TokenPool {
        let mut pool = TokenPool::default();
        pool.push_class("A", vec![doc(&["x", "y"])]);
        pool.push_class("B", vec![doc(&["y"])]);
        pool
    }

    #[test]
    fn test_two_class_example() {
        let vocab = build_dictionary(&classes(&["A", "B"]), &sample_pool());

        assert_eq!(vocab.len(), 2);
        let x = vocab.get("x").unwrap();
        assert_eq!(x.index, 0);
        assert_eq!(x.counts, HashMap::from([("A".to_string(), 1)]));

        let y = vocab.get("y").unwrap();
        assert_eq!(y.index, 1);
        assert_eq!(
            y.counts,
            HashMap::from([("A".to_string(), 1), ("B".to_string(), 1)])
        );
    }

    #[test]
    fn test_class_order_decides_indices() {
        let vocab = build_dictionary(&classes(&["B", "A"]), &sample_pool());
        assert_eq!(vocab.index_of("y"), Some(0));
        assert_eq!(vocab.index_of("x"), Some(1));
    }

    #[test]
    fn test_rebuild_gives_identical_indices() {
        let mut pool = TokenPool::default();
        pool.push_class("A", vec![doc(&["c", "a", "b"]), doc(&["d", "a"])]);
        pool.push_class("B", vec![doc(&["e", "c"]), Vec::new(), doc(&["f"])]);
        let cls = classes(&["A", "B"]);

        let first  = build_dictionary(&cls, &pool);
        let second = build_dictionary(&cls, &pool);
        assert_eq!(first, second);

        let mut indices: Vec<usize> = first.iter().map(|(_, e)| e.index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..first.len()).collect::<Vec<_>>());

        let order: Vec<&str> = first.iter_by_index().into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, vec!["c", "a", "b", "d", "e", "f"]);
    }

    #[test]
    fn test_counts_match_occurrences() {
        let mut pool = TokenPool::default();
        pool.push_class("A", vec![doc(&["w", "w", "v"]), doc(&["w"])]);
        pool.push_class("B", vec![doc(&["v", "w"]), doc(&["v", "v"])]);
        let cls = classes(&["A", "B"]);

        let vocab = build_dictionary(&cls, &pool);
        for class in &cls {
            for token in ["v", "w"] {
                let expected = pool
                    .documents(class)
                    .iter()
                    .flatten()
                    .filter(|t| t.as_str() == token)
                    .count() as u64;
                assert_eq!(vocab.count(token, class), expected);
            }
        }
        assert_eq!(vocab.count("w", "A"), 3);
        assert_eq!(vocab.count("v", "B"), 3);
    }

    #[test]
    fn test_unlisted_class_is_ignored() {
        let vocab = build_dictionary(&classes(&["A"]), &sample_pool());
        assert_eq!(vocab.count("y", "B"), 0);
        assert!(vocab.get("y").unwrap().counts.get("B").is_none());
    }
}

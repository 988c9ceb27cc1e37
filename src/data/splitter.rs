// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Splits every class's document list into two parts:
//   - Training set: the first floor(ratio × total) documents
//   - Testing set:  everything after that
//
// The split is positional. Nothing is shuffled, so the same
// corpus and ratio always produce the same two sets, and
// train followed by test is exactly the original list.
//
// Example with ratio = 0.7 and 10 documents:
//   train = docs[0..7], test = docs[7..10]

use crate::domain::{
    corpus::LabeledCorpus,
    split::{CorpusSplit, SplitRatio},
};

/// Split each class of `corpus` into a training prefix and a
/// testing suffix.
///
/// # Arguments
/// * `ratio`  - Share of each class that goes to training
/// * `corpus` - Ordered classes and their ordered documents
///
/// # Returns
/// The two sub-corpora, with the same class order as `corpus`
pub fn split_train_test(ratio: SplitRatio, corpus: &LabeledCorpus) -> CorpusSplit {
    let split = CorpusSplit {
        train: corpus.map_files(|_, paths| paths[..ratio.train_count(paths.len())].to_vec()),
        test:  corpus.map_files(|_, paths| paths[ratio.train_count(paths.len())..].to_vec()),
    };

    for row in split.summary() {
        tracing::info!(
            "Number of files in {} is {}: {} to training, {} to testing",
            row.class,
            row.total,
            row.train,
            row.test,
        );
    }

    split
}

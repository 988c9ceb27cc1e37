// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types that describe a labelled corpus and the
// vocabulary built from it. No file I/O lives here; the data
// and infra layers do the reading and writing.
//
//   corpus.rs     — LabeledCorpus: ordered classes → ordered paths
//   vocabulary.rs — Vocabulary / VocabEntry: token → (index, counts)
//   split.rs      — SplitRatio and the train/test CorpusSplit
//   errors.rs     — typed errors for bad configuration and corpora
//   traits.rs     — CorpusSource, implemented by corpus loaders

/// Ordered class list with the document paths of each class
pub mod corpus;

/// Token → (stable index, per-class counts)
pub mod vocabulary;

/// Train/test partition types
pub mod split;

/// Configuration and corpus errors
pub mod errors;

/// Core abstractions that other layers implement
pub mod traits;

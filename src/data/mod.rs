// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a corpus on disk and an in-memory
// vocabulary. The pipeline flows in this order:
//
//   corpus folders
//       │
//       ▼
//   DirectoryCorpus   → class → ordered document paths
//       │
//       ▼
//   split_train_test  → positional training / testing split
//       │
//       ▼
//   Tokenizer         → one document → ordered tokens
//       │
//       ▼
//   TokenPool         → class → per-document token lists
//       │
//       ▼
//   build_dictionary  → token → (index, per-class counts)
//
// Each module is responsible for exactly one step.

/// Discovers class folders and their documents
pub mod loader;

/// Positional train/test split per class
pub mod splitter;

/// Reads and normalises one document into tokens
pub mod tokenizer;

/// Applies the tokenizer to a whole corpus
pub mod token_pool;

/// Aggregates a token pool into a vocabulary
pub mod dictionary;

// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches files the pipeline produces:
//
//   dictionary_store.rs — the vocabulary as CSV rows
//                         (token, index, class:count, ...)
//                         with tolerant, row-skipping reads
//
//   manifest.rs         — JSON side files of a build run:
//                         the train/test split handed to the
//                         model trainer, and the build config
//                         needed to tokenise new documents
//                         the same way

/// Vocabulary CSV save and load
pub mod dictionary_store;

/// Split and build-config JSON files
pub mod manifest;

// ============================================================
// Layer 3 — Core Traits
// ============================================================

use anyhow::Result;

use crate::domain::corpus::LabeledCorpus;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Anything that can enumerate the documents of a labelled corpus.
///
/// Implementations:
///   - DirectoryCorpus → one sub-directory per class
pub trait CorpusSource {
    /// Return the ordered class list and each class's ordered paths.
    fn discover(&self) -> Result<LabeledCorpus>;
}

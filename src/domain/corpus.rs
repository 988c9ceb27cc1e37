// ============================================================
// Layer 3 — Labeled Corpus
// ============================================================
// The mapping handed to the pipeline by corpus discovery:
// an ordered list of class labels, and for every label an
// ordered list of document paths.
//
// Class order matters downstream: it decides which class a
// token is first seen in, and therefore the token's index.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::domain::errors::CorpusError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledCorpus {
    classes: Vec<String>,
    files:   HashMap<String, Vec<PathBuf>>,
}

impl LabeledCorpus {
    /// Build a corpus, checking that every listed class has a path
    /// list and that no class is listed twice.
    ///
    /// Entries of `files` whose class is not in `classes` are kept
    /// but never visited.
    pub fn new(
        classes: Vec<String>,
        files:   HashMap<String, Vec<PathBuf>>,
    ) -> Result<Self, CorpusError> {
        let mut seen = HashSet::with_capacity(classes.len());
        for class in &classes {
            if !seen.insert(class.as_str()) {
                return Err(CorpusError::DuplicateClass(class.clone()));
            }
            if !files.contains_key(class) {
                return Err(CorpusError::MissingClass(class.clone()));
            }
        }
        Ok(Self { classes, files })
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Paths of one class, in corpus order. Unknown classes have none.
    pub fn files(&self, class: &str) -> &[PathBuf] {
        self.files.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(class, paths)` in class order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[PathBuf])> + '_ {
        self.classes
            .iter()
            .map(move |class| (class.as_str(), self.files(class)))
    }

    /// A corpus with the same classes, where each class's paths are
    /// replaced by `f(class, paths)`.
    pub fn map_files<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&str, &[PathBuf]) -> Vec<PathBuf>,
    {
        let files = self
            .iter()
            .map(|(class, paths)| (class.to_owned(), f(class, paths)))
            .collect();
        Self { classes: self.classes.clone(), files }
    }

    /// Number of documents across all listed classes
    pub fn total_files(&self) -> usize {
        self.iter().map(|(_, paths)| paths.len()).sum()
    }
}

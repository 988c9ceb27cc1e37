// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Load a saved dictionary and summarise it: how many rows were
// kept or skipped, total counts per class, and the entries of
// any tokens the caller asks about.

use anyhow::Result;
use std::{collections::BTreeMap, path::PathBuf};

use crate::domain::vocabulary::VocabEntry;
use crate::infra::dictionary_store::DictionaryStore;

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub entries:      usize,
    pub skipped:      usize,
    pub class_totals: BTreeMap<String, u64>,

    /// Each requested token with its entry, if present
    pub lookups: Vec<(String, Option<VocabEntry>)>,
}

pub struct InspectUseCase {
    dictionary: PathBuf,
}

impl InspectUseCase {
    pub fn new(dictionary: impl Into<PathBuf>) -> Self {
        Self { dictionary: dictionary.into() }
    }

    pub fn execute(&self, tokens: &[String]) -> Result<InspectReport> {
        let report = DictionaryStore::new(&self.dictionary).load_with_report()?;
        let vocab  = &report.vocab;

        let lookups = tokens
            .iter()
            .map(|t| (t.clone(), vocab.get(t).cloned()))
            .collect();

        Ok(InspectReport {
            entries:      vocab.len(),
            skipped:      report.skipped,
            class_totals: vocab.class_totals(),
            lookups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    #[test]
    fn test_reports_entries_and_lookups() {
        let dir  = TempDir::new("inspect_test").unwrap();
        let path = dir.path().join("dict.csv");
        fs::write(&path, "apple,0,A:2,B:1\npear,1,B:5\nbad row\n").unwrap();

        let report = InspectUseCase::new(&path)
            .execute(&["pear".to_string(), "kiwi".to_string()])
            .unwrap();

        assert_eq!(report.entries, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.class_totals.get("A"), Some(&2));
        assert_eq!(report.class_totals.get("B"), Some(&6));
        assert_eq!(report.lookups[0].1.as_ref().map(|e| e.index), Some(1));
        assert!(report.lookups[1].1.is_none());
    }

    #[test]
    fn test_missing_dictionary_is_an_error() {
        let dir = TempDir::new("inspect_test").unwrap();
        assert!(InspectUseCase::new(dir.path().join("none.csv")).execute(&[]).is_err());
    }
}

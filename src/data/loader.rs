// ============================================================
// Layer 4 — Directory Corpus Loader
// ============================================================
// Discovers a labelled corpus laid out one class per folder:
//
//   corpus/
//     comp.graphics/
//       37261
//       37913
//     rec.autos/
//       101551
//       ...
//
// Every immediate sub-directory is a class, named after the
// folder. Every regular file directly inside it is a document
// of that class. Classes and documents are sorted by name so
// the same tree always yields the same corpus. Entries whose
// names start with '.' are ignored.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::domain::{corpus::LabeledCorpus, errors::CorpusError, traits::CorpusSource};

pub struct DirectoryCorpus {
    /// Root folder holding one sub-folder per class
    root: PathBuf,
}

impl DirectoryCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl CorpusSource for DirectoryCorpus {
    fn discover(&self) -> Result<LabeledCorpus> {
        if !self.root.is_dir() {
            return Err(CorpusError::MissingRoot(self.root.clone()).into());
        }

        let mut classes = Vec::new();
        let mut files   = HashMap::new();

        for class_dir in sorted_entries(&self.root)? {
            if !class_dir.is_dir() {
                continue;
            }
            let Some(class) = visible_name(&class_dir) else {
                continue;
            };

            let docs: Vec<PathBuf> = sorted_entries(&class_dir)?
                .into_iter()
                .filter(|p| p.is_file() && visible_name(p).is_some())
                .collect();

            tracing::debug!("Class '{}': {} documents", class, docs.len());
            classes.push(class.clone());
            files.insert(class, docs);
        }

        let corpus = LabeledCorpus::new(classes, files)?;
        tracing::info!(
            "Discovered {} classes, {} documents under '{}'",
            corpus.classes().len(),
            corpus.total_files(),
            self.root.display()
        );
        Ok(corpus)
    }
}

/// Children of `dir`, sorted by file name
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, CorpusError> {
    let unreadable = |source| CorpusError::Unreadable {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        entries.push(entry.map_err(unreadable)?.path());
    }
    entries.sort();
    Ok(entries)
}

/// UTF-8 file name that does not start with '.'
fn visible_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.starts_with('.'))
        .map(str::to_owned)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_discovers_sorted_classes_and_files() {
        let dir = TempDir::new("loader_test").unwrap();
        for (class, doc) in [("sci.space", "2"), ("sci.space", "1"), ("alt.atheism", "9")] {
            fs::create_dir_all(dir.path().join(class)).unwrap();
            fs::write(dir.path().join(class).join(doc), "text").unwrap();
        }
        fs::write(dir.path().join("README"), "not a class").unwrap();
        fs::create_dir_all(dir.path().join(".git")).unwrap();
        fs::write(dir.path().join("sci.space").join(".hidden"), "x").unwrap();
        fs::create_dir_all(dir.path().join("sci.space").join("nested")).unwrap();

        let corpus = DirectoryCorpus::new(dir.path()).discover().unwrap();

        assert_eq!(corpus.classes(), &["alt.atheism".to_string(), "sci.space".to_string()]);
        assert_eq!(
            corpus.files("sci.space"),
            &[dir.path().join("sci.space").join("1"), dir.path().join("sci.space").join("2")]
        );
        assert_eq!(corpus.total_files(), 3);
    }

    #[test]
    fn test_empty_class_folder_is_kept() {
        let dir = TempDir::new("loader_test").unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();

        let corpus = DirectoryCorpus::new(dir.path()).discover().unwrap();
        assert_eq!(corpus.classes(), &["empty".to_string()]);
        assert!(corpus.files("empty").is_empty());
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new("loader_test").unwrap();
        let err = DirectoryCorpus::new(dir.path().join("absent")).discover().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CorpusError>(),
            Some(CorpusError::MissingRoot(_))
        ));
    }
}

// ============================================================
// Layer 6 — Run Manifest
// ============================================================
// JSON files written next to the dictionary:
//
//   <output_dir>/
//     dictionary.csv      ← written by DictionaryStore
//     split.json          ← training / testing paths per class
//     build_config.json   ← tokenizer and split settings
//
// split.json is what an external trainer reads to know which
// documents to learn from and which to hold out. The config
// lets it tokenise test documents with the same settings.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::application::build_use_case::BuildConfig;
use crate::domain::{corpus::LabeledCorpus, errors::CorpusError, split::CorpusSplit};

const SPLIT_FILE: &str = "split.json";
const CONFIG_FILE: &str = "build_config.json";

/// Serialised form of a CorpusSplit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitManifest {
    /// Class order of the corpus
    pub classes: Vec<String>,
    pub train:   BTreeMap<String, Vec<PathBuf>>,
    pub test:    BTreeMap<String, Vec<PathBuf>>,
}

impl SplitManifest {
    pub fn from_split(split: &CorpusSplit) -> Self {
        let collect = |corpus: &LabeledCorpus| {
            corpus
                .iter()
                .map(|(class, paths)| (class.to_owned(), paths.to_vec()))
                .collect()
        };
        Self {
            classes: split.train.classes().to_vec(),
            train:   collect(&split.train),
            test:    collect(&split.test),
        }
    }

    /// Rebuild the split, failing if a class lacks a path list
    pub fn into_split(self) -> Result<CorpusSplit, CorpusError> {
        Ok(CorpusSplit {
            train: LabeledCorpus::new(self.classes.clone(), self.train.into_iter().collect())?,
            test:  LabeledCorpus::new(self.classes, self.test.into_iter().collect())?,
        })
    }
}

/// Reads and writes the JSON side files of one output directory
pub struct ManifestStore {
    dir: PathBuf,
}

impl ManifestStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn split_path(&self) -> PathBuf {
        self.dir.join(SPLIT_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn save_split(&self, split: &CorpusSplit) -> Result<()> {
        write_json(&self.split_path(), &SplitManifest::from_split(split))
    }

    pub fn load_split(&self) -> Result<CorpusSplit> {
        let manifest: SplitManifest = read_json(&self.split_path())?;
        Ok(manifest.into_split()?)
    }

    pub fn save_config(&self, cfg: &BuildConfig) -> Result<()> {
        write_json(&self.config_path(), cfg)
    }

    pub fn load_config(&self) -> Result<BuildConfig> {
        read_json(&self.config_path())
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Cannot write '{}'", path.display()))?;
    tracing::debug!("Wrote '{}'", path.display());
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Cannot parse '{}'", path.display()))
}

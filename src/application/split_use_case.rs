// ============================================================
// Layer 2 — SplitUseCase
// ============================================================
// Split a corpus into training / testing documents and write
// split.json, without tokenising anything.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::data::{loader::DirectoryCorpus, splitter::split_train_test};
use crate::domain::{
    split::{ClassSplitCounts, SplitRatio},
    traits::CorpusSource,
};
use crate::infra::manifest::ManifestStore;

pub struct SplitUseCase {
    ratio:      f64,
    output_dir: PathBuf,
}

impl SplitUseCase {
    pub fn new(ratio: f64, output_dir: impl Into<PathBuf>) -> Self {
        Self { ratio, output_dir: output_dir.into() }
    }

    /// Split the class folders under `corpus_dir`
    pub fn execute(&self, corpus_dir: &str) -> Result<Vec<ClassSplitCounts>> {
        self.execute_with(&DirectoryCorpus::new(corpus_dir))
    }

    pub fn execute_with(&self, source: &dyn CorpusSource) -> Result<Vec<ClassSplitCounts>> {
        let ratio  = SplitRatio::new(self.ratio)?;
        let corpus = source.discover()?;
        let split  = split_train_test(ratio, &corpus);

        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Cannot create output directory '{}'", self.output_dir.display())
        })?;
        ManifestStore::new(&self.output_dir).save_split(&split)?;

        Ok(split.summary())
    }
}

// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Orchestrates a full dictionary build in order:
//
//   Step 1: Validate the configuration     (Layer 3 - domain)
//   Step 2: Discover the labelled corpus   (Layer 4 - data)
//   Step 3: Split train / test per class   (Layer 4 - data)
//   Step 4: Tokenize the training split    (Layer 4 - data)
//   Step 5: Build the dictionary           (Layer 4 - data)
//   Step 6: Save dictionary + manifests    (Layer 6 - infra)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::data::{
    dictionary::build_dictionary,
    loader::DirectoryCorpus,
    splitter::split_train_test,
    token_pool::TokenPool,
    tokenizer::{Tokenizer, TokenizerConfig},
};
use crate::domain::{errors::ConfigError, split::SplitRatio, traits::CorpusSource};
use crate::infra::{dictionary_store::DictionaryStore, manifest::ManifestStore};

// ─── Build Configuration ─────────────────────────────────────────────────────
// Saved as build_config.json so later runs can tokenise documents
// exactly the way the dictionary was built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub corpus_dir:      String,
    pub output_dir:      String,
    pub ratio:           f64,
    pub min_len:         usize,
    pub remove_numerics: bool,
    pub dictionary_file: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            corpus_dir:      "data/corpus".to_string(),
            output_dir:      "out".to_string(),
            ratio:           0.8,
            min_len:         0,
            remove_numerics: true,
            dictionary_file: "dictionary.csv".to_string(),
        }
    }
}

impl BuildConfig {
    /// Reject settings that would make the run meaningless.
    pub fn validate(&self) -> Result<SplitRatio, ConfigError> {
        SplitRatio::new(self.ratio)
    }

    pub fn tokenizer_config(&self) -> TokenizerConfig {
        TokenizerConfig {
            min_len:         self.min_len,
            remove_numerics: self.remove_numerics,
        }
    }

    pub fn dictionary_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(&self.dictionary_file)
    }
}

/// What a build produced
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub classes:         usize,
    pub documents:       usize,
    pub train_documents: usize,
    pub tokens:          usize,
    pub vocab_size:      usize,
    pub dictionary_path: PathBuf,
}

pub struct BuildUseCase {
    config: BuildConfig,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Build from the class folders under `corpus_dir`
    pub fn execute(&self) -> Result<BuildReport> {
        let source = DirectoryCorpus::new(&self.config.corpus_dir);
        self.execute_with(&source)
    }

    /// Build from any corpus source
    pub fn execute_with(&self, source: &dyn CorpusSource) -> Result<BuildReport> {
        let cfg = &self.config;

        // ── Step 1: Fail fast on bad settings ────────────────────────────────
        let ratio = cfg.validate()?;

        // ── Step 2: Discover documents ───────────────────────────────────────
        let corpus = source.discover()?;

        // ── Step 3: Positional train/test split ──────────────────────────────
        let split = split_train_test(ratio, &corpus);

        // ── Step 4: Tokenize training documents ──────────────────────────────
        let tokenizer = Tokenizer::new(cfg.tokenizer_config());
        let pool      = TokenPool::build(&tokenizer, &split.train);
        tracing::info!(
            "Tokenized {} training documents into {} tokens",
            split.train.total_files(),
            pool.token_count()
        );

        // ── Step 5: Aggregate into the dictionary ────────────────────────────
        let vocab = build_dictionary(corpus.classes(), &pool);

        // ── Step 6: Persist ──────────────────────────────────────────────────
        fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("Cannot create output directory '{}'", cfg.output_dir))?;

        let dictionary_path = cfg.dictionary_path();
        DictionaryStore::new(&dictionary_path).save(&vocab, corpus.classes())?;

        let manifests = ManifestStore::new(&cfg.output_dir);
        manifests.save_split(&split)?;
        manifests.save_config(cfg)?;

        Ok(BuildReport {
            classes:         corpus.classes().len(),
            documents:       corpus.total_files(),
            train_documents: split.train.total_files(),
            tokens:          pool.token_count(),
            vocab_size:      vocab.len(),
            dictionary_path,
        })
    }
}

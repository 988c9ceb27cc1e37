// ============================================================
// Layer 4 — Token Pool Builder
// ============================================================
// Runs the tokenizer over every document of every class.
// The result keeps the corpus shape: one token list per
// document, documents in corpus order, classes in class order.
// Unreadable documents stay in the pool as empty lists.

use std::collections::HashMap;

use crate::data::tokenizer::Tokenizer;
use crate::domain::corpus::LabeledCorpus;

/// Tokens of one document
pub type DocTokens = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenPool {
    classes: Vec<String>,
    docs:    HashMap<String, Vec<DocTokens>>,
}

impl TokenPool {
    /// Tokenize every document of `corpus`, in order.
    pub fn build(tokenizer: &Tokenizer, corpus: &LabeledCorpus) -> Self {
        let mut pool = Self::default();

        for (class, paths) in corpus.iter() {
            let docs: Vec<DocTokens> = paths
                .iter()
                .map(|path| tokenizer.tokenize_path(path))
                .collect();

            tracing::debug!(
                "Tokenized {} documents of '{}' ({} tokens)",
                docs.len(),
                class,
                docs.iter().map(Vec::len).sum::<usize>()
            );
            pool.push_class(class, docs);
        }

        pool
    }

    /// Append a class and its per-document tokens.
    /// Replaces the documents if the class is already present.
    pub fn push_class(&mut self, class: &str, docs: Vec<DocTokens>) {
        if self.docs.insert(class.to_owned(), docs).is_none() {
            self.classes.push(class.to_owned());
        }
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Token lists of one class; empty for unknown classes
    pub fn documents(&self, class: &str) -> &[DocTokens] {
        self.docs.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of tokens across all documents
    pub fn token_count(&self) -> usize {
        self.docs.values().flatten().map(Vec::len).sum()
    }
}

// ============================================================
// Layer 4 — Document Tokenizer
// ============================================================
// Turns one document on disk into an ordered list of tokens.
//
// Steps (applied in order):
//   1. Read the whole file as UTF-8 text
//   2. Lowercase it
//   3. Find every run of ASCII letters, and every run of digits
//      with an optional ".digits" fraction
//   4. Strip punctuation from each run (the decimal point),
//      and digits too when numerics are excluded
//   5. Keep runs that are non-empty and longer than `min_len`
//
// Runs are always kept apart: "test2" gives "test" and "2".
// Anything that is neither an ASCII letter nor a digit only
// separates runs and never becomes a token itself.
//
// Example (min_len = 0, numerics removed):
//   "Hello, World! 123 test2 a" → ["hello", "world", "test", "a"]

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    static ref TOKEN_RGX: Regex = Regex::new(r"[a-z]+|[0-9]+(?:\.[0-9]+)?").unwrap();
}

/// Why a document produced no tokens
#[derive(Error, Debug)]
pub enum DocumentReadError {
    #[error("could not open '{}'", path.display())]
    Open {
        path:   PathBuf,
        source: io::Error,
    },
    #[error("'{}' is not valid UTF-8 text", path.display())]
    Decode { path: PathBuf },
}

/// Filtering options applied to every token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Tokens must be strictly longer than this
    pub min_len: usize,

    /// Drop digits, so purely numeric runs disappear
    pub remove_numerics: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { min_len: 0, remove_numerics: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    /// Tokenize the file at `path`.
    ///
    /// A file that cannot be opened or decoded yields an empty list
    /// and a warning, so one bad document never stops a corpus run.
    pub fn tokenize_path(&self, path: &Path) -> Vec<String> {
        match self.try_tokenize_path(path) {
            Ok(tokens) => {
                tracing::debug!("{}: {} tokens", path.display(), tokens.len());
                tokens
            }
            Err(e) => {
                tracing::warn!("Skipping document: {}", e);
                Vec::new()
            }
        }
    }

    /// Like `tokenize_path`, but reports why a document was unreadable
    pub fn try_tokenize_path(&self, path: &Path) -> Result<Vec<String>, DocumentReadError> {
        let bytes = fs::read(path).map_err(|source| DocumentReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| DocumentReadError::Decode {
            path: path.to_path_buf(),
        })?;
        Ok(self.tokenize(&text))
    }

    /// Tokenize raw text already held in memory
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_ascii_lowercase();

        TOKEN_RGX
            .find_iter(&lowered)
            .map(|m| self.strip(m.as_str()))
            .filter(|token| !token.is_empty() && token.len() > self.config.min_len)
            .collect()
    }

    fn strip(&self, run: &str) -> String {
        run.chars()
            .filter(|c| !c.is_ascii_punctuation())
            .filter(|c| !(self.config.remove_numerics && c.is_ascii_digit()))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempdir::TempDir;

    fn tokenizer(min_len: usize, remove_numerics: bool) -> Tokenizer {
        Tokenizer::new(TokenizerConfig { min_len, remove_numerics })
    }

    #[test]
    fn test_mixed_text_with_numerics_removed() {
        let t = tokenizer(0, true);
        assert_eq!(
            t.tokenize("Hello, World! 123 test2 a"),
            vec!["hello", "world", "test", "a"]
        );
    }

    #[test]
    fn test_numerics_kept() {
        let t = tokenizer(0, false);
        assert_eq!(
            t.tokenize("Hello, World! 123 test2 a"),
            vec!["hello", "world", "123", "test", "2", "a"]
        );
    }

    #[test]
    fn test_decimal_point_is_stripped() {
        assert_eq!(tokenizer(0, false).tokenize("pi is 3.14"), vec!["pi", "is", "314"]);
        assert_eq!(tokenizer(0, true).tokenize("pi is 3.14"), vec!["pi", "is"]);
    }

    #[test]
    fn test_min_len_is_strict() {
        let t = tokenizer(2, true);
        let tokens = t.tokenize("a an the into");
        assert_eq!(tokens, vec!["the", "into"]);
        assert!(tokens.iter().all(|tok| tok.len() > 2));
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let t = tokenizer(0, true);
        assert_eq!(t.tokenize("b a b\nA"), vec!["b", "a", "b", "a"]);
    }

    #[test]
    fn test_non_ascii_and_whitespace_only_separate() {
        let t = tokenizer(0, true);
        assert_eq!(t.tokenize("café\tbar\r\nbaz"), vec!["caf", "bar", "baz"]);
        assert!(t.tokenize("\t \u{00e9}\u{00e8} !?").is_empty());
    }

    #[test]
    fn test_no_numeric_tokens_when_removed() {
        let t = tokenizer(0, true);
        let tokens = t.tokenize("1 22 3.5 x9y 100.001 abc");
        assert_eq!(tokens, vec!["x", "y", "abc"]);
        assert!(tokens.iter().all(|tok| !tok.chars().all(|c| c.is_ascii_digit())));
    }

    #[test]
    fn test_tokenize_path_is_deterministic() {
        let dir  = TempDir::new("tokenizer_test").unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "From: someone\nSubject: Re: 42 questions\n\nThe answer.").unwrap();

        let t      = Tokenizer::default();
        let first  = t.tokenize_path(&path);
        let second = t.tokenize_path(&path);
        assert_eq!(first, second);
        assert_eq!(first, vec!["from", "someone", "subject", "re", "questions", "the", "answer"]);
    }

    #[test]
    fn test_empty_file_gives_no_tokens() {
        let dir  = TempDir::new("tokenizer_test").unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert!(Tokenizer::default().tokenize_path(&path).is_empty());
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir  = TempDir::new("tokenizer_test").unwrap();
        let path = dir.path().join("nope.txt");

        let t = Tokenizer::default();
        assert!(t.tokenize_path(&path).is_empty());
        assert!(matches!(
            t.try_tokenize_path(&path),
            Err(DocumentReadError::Open { .. })
        ));
    }

    #[test]
    fn test_binary_file_degrades_to_empty() {
        let dir  = TempDir::new("tokenizer_test").unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0x66u8, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        let t = Tokenizer::default();
        assert!(t.tokenize_path(&path).is_empty());
        assert!(matches!(
            t.try_tokenize_path(&path),
            Err(DocumentReadError::Decode { .. })
        ));
    }
}

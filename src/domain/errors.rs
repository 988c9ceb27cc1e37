use std::path::PathBuf;

use thiserror::Error;

/// Rejected configuration values. Raised before any document is read.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("split ratio must be a number in [0, 1], got {0}")]
    RatioOutOfRange(f64),
}

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("class '{0}' has no document list")]
    MissingClass(String),
    #[error("class '{0}' is listed more than once")]
    DuplicateClass(String),
    #[error("corpus directory '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("cannot read corpus directory '{}'", path.display())]
    Unreadable {
        path:   PathBuf,
        source: std::io::Error,
    },
}

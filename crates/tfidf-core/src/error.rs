//! Error types for the TF-IDF pipeline

use crate::scorer::Mode;

/// Errors surfaced by the scorer and its stages.
#[derive(thiserror::Error, Debug)]
pub enum TfIdfError {
    /// A document tokenized to nothing while empty documents are disallowed.
    #[error("document {index} contains no tokens after stopword removal")]
    EmptyDocument { index: usize },

    /// A term-frequency entry has no matching IDF weight.
    #[error("token {token:?} has a term frequency but no inverse document frequency")]
    UnknownToken { token: String },

    /// Top-k selection was asked for a negative or unparsable count.
    #[error("invalid keyword count {k:?}: expected a non-negative integer")]
    InvalidK { k: String },

    /// A mode name outside of `single` / `all`.
    #[error("invalid mode {mode:?}: expected \"single\" or \"all\"")]
    InvalidMode { mode: String },

    /// A result computed in one mode was passed to selection in the other.
    #[error("result was computed in {found} mode but {expected} mode was requested")]
    ModeMismatch { expected: Mode, found: Mode },

    /// Malformed JSON configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TfIdfError>;

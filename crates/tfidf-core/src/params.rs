//! Scorer configuration

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Stopwords removed by the default tokenizer.
pub const DEFAULT_STOPWORDS: [&str; 8] = ["the", "and", "is", "in", "it", "of", "to", "a"];

/// Ordering applied between tokens with equal scores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Keep first-appearance order (within the document in single mode,
    /// across the corpus in all mode)
    #[default]
    FirstSeen,
    /// Ascending token order
    Lexicographic,
}

/// TF-IDF scorer parameters.
///
/// Every field has a default, so a JSON document only needs to name the
/// fields it overrides:
///
/// ```
/// use tfidf_core::{TfIdfParams, TieBreak};
///
/// let params = TfIdfParams::from_json(r#"{"tie_break": "lexicographic"}"#).unwrap();
/// assert_eq!(params.tie_break, TieBreak::Lexicographic);
/// assert_eq!(params.stopwords.len(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfParams {
    /// Words dropped after lowercasing. Matched exactly.
    pub stopwords: Vec<String>,
    pub tie_break: TieBreak,
    /// When false, a document with no tokens left is an error instead of
    /// an empty term-frequency map.
    pub allow_empty_documents: bool,
}

impl Default for TfIdfParams {
    fn default() -> Self {
        Self {
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            tie_break: TieBreak::default(),
            allow_empty_documents: true,
        }
    }
}

impl TfIdfParams {
    /// Parse parameters from JSON, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the stopword set.
    #[must_use]
    pub fn with_stopwords<I, S>(mut self, stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords = stopwords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_allow_empty_documents(mut self, allow: bool) -> Self {
        self.allow_empty_documents = allow;
        self
    }
}

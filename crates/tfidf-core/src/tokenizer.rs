//! Whitespace tokenizer with stopword removal
//!
//! Splits on whitespace and lowercases. No punctuation stripping, no stemming.

use ahash::AHashSet;

use crate::params::DEFAULT_STOPWORDS;

/// Tokenizer that lowercases words and drops stopwords
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stopwords: AHashSet<String>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_STOPWORDS)
    }
}

impl Tokenizer {
    /// Create a tokenizer with a custom stopword set
    pub fn new<I, S>(stopwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stopwords: stopwords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Tokenize text into terms, keeping order and duplicates
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|word| word.to_lowercase())
            .filter(|word| !self.is_stopword(word))
            .collect()
    }
}

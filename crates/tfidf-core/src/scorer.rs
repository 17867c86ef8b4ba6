//! TF-IDF scoring and top-k keyword selection
//!
//! The scorer runs the whole pipeline in one call: tokenize, term
//! frequency, inverse document frequency, then `tf * idf` per document.
//! In [`Mode::Single`] every document keeps its own map; in [`Mode::All`]
//! the per-document scores are summed per token.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::Corpus;
use crate::error::{Result, TfIdfError};
use crate::idf::inverse_document_frequency;
use crate::params::{TfIdfParams, TieBreak};
use crate::tf::{term_frequency, TermScores};
use crate::tokenizer::Tokenizer;

/// Output mode shared by scoring and selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One score map per document
    Single,
    /// One score map aggregated over the corpus
    All,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Single => f.write_str("single"),
            Mode::All => f.write_str("all"),
        }
    }
}

impl FromStr for Mode {
    type Err = TfIdfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "single" => Ok(Mode::Single),
            "all" => Ok(Mode::All),
            _ => Err(TfIdfError::InvalidMode {
                mode: s.to_string(),
            }),
        }
    }
}

/// TF-IDF scores in the shape of the mode they were computed in
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TfIdfResult {
    /// Per-document scores, in corpus order
    Single(Vec<TermScores>),
    /// Scores summed across documents
    All(TermScores),
}

impl TfIdfResult {
    pub fn mode(&self) -> Mode {
        match self {
            TfIdfResult::Single(_) => Mode::Single,
            TfIdfResult::All(_) => Mode::All,
        }
    }
}

/// Ranked keywords
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Keywords {
    /// Ranked `(token, score)` pairs per document, in corpus order
    Single(Vec<Vec<(String, f64)>>),
    /// Ranked tokens across the corpus, without scores
    All(Vec<String>),
}

impl Keywords {
    pub fn mode(&self) -> Mode {
        match self {
            Keywords::Single(_) => Mode::Single,
            Keywords::All(_) => Mode::All,
        }
    }
}

/// Number of keywords to keep. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TopK(usize);

impl TopK {
    pub fn new(k: usize) -> Self {
        Self(k)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for TopK {
    fn from(k: usize) -> Self {
        Self(k)
    }
}

impl TryFrom<i64> for TopK {
    type Error = TfIdfError;

    fn try_from(k: i64) -> Result<Self> {
        usize::try_from(k)
            .map(Self)
            .map_err(|_| TfIdfError::InvalidK { k: k.to_string() })
    }
}

impl FromStr for TopK {
    type Err = TfIdfError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<usize>()
            .map(Self)
            .map_err(|_| TfIdfError::InvalidK { k: s.to_string() })
    }
}

/// TF-IDF scorer
#[derive(Debug, Clone)]
pub struct TfIdfScorer {
    tokenizer: Tokenizer,
    params: TfIdfParams,
}

impl Default for TfIdfScorer {
    fn default() -> Self {
        Self::new(TfIdfParams::default())
    }
}

impl TfIdfScorer {
    pub fn new(params: TfIdfParams) -> Self {
        Self {
            tokenizer: Tokenizer::new(params.stopwords.iter().cloned()),
            params,
        }
    }

    pub fn params(&self) -> &TfIdfParams {
        &self.params
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Tokenize `documents` and score them in the given mode
    pub fn compute_tf_idf<T: AsRef<str>>(&self, documents: &[T], mode: Mode) -> Result<TfIdfResult> {
        let corpus = Corpus::from_texts(documents, &self.tokenizer);
        self.compute_corpus(&corpus, mode)
    }

    /// Score an already tokenized corpus
    pub fn compute_corpus(&self, corpus: &Corpus, mode: Mode) -> Result<TfIdfResult> {
        if !self.params.allow_empty_documents {
            if let Some(index) = corpus.documents().iter().position(|doc| doc.is_empty()) {
                return Err(TfIdfError::EmptyDocument { index });
            }
        }
        let empty_docs = corpus.documents().iter().filter(|doc| doc.is_empty()).count();

        let idf = inverse_document_frequency(corpus);
        let per_doc = corpus
            .documents()
            .iter()
            .map(|doc| weigh(&term_frequency(doc), &idf))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            %mode,
            num_docs = corpus.len(),
            empty_docs,
            num_terms = idf.len(),
            "Computed TF-IDF"
        );

        Ok(match mode {
            Mode::Single => TfIdfResult::Single(per_doc),
            Mode::All => {
                let mut aggregate = TermScores::with_capacity(idf.len());
                for scores in per_doc {
                    for (token, score) in scores {
                        *aggregate.entry(token).or_insert(0.0) += score;
                    }
                }
                TfIdfResult::All(aggregate)
            }
        })
    }

    /// Select the `k` best scored keywords.
    ///
    /// `mode` must match the mode `result` was computed in. Fewer than `k`
    /// available tokens returns all of them.
    pub fn top_keywords(
        &self,
        result: &TfIdfResult,
        k: impl Into<TopK>,
        mode: Mode,
    ) -> Result<Keywords> {
        let k = k.into().get();
        debug!(%mode, k, "Selecting top keywords");

        match (mode, result) {
            (Mode::Single, TfIdfResult::Single(docs)) => Ok(Keywords::Single(
                docs.iter().map(|scores| self.rank(scores, k)).collect(),
            )),
            (Mode::All, TfIdfResult::All(aggregate)) => Ok(Keywords::All(
                self.rank(aggregate, k)
                    .into_iter()
                    .map(|(token, _)| token)
                    .collect(),
            )),
            (expected, result) => Err(TfIdfError::ModeMismatch {
                expected,
                found: result.mode(),
            }),
        }
    }

    /// Sort by score descending, ties per the configured rule, keep `k`
    fn rank(&self, scores: &TermScores, k: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(&String, f64)> = scores.iter().map(|(t, &s)| (t, s)).collect();

        // sort_by is stable, so FirstSeen keeps map order on equal scores
        match self.params.tie_break {
            TieBreak::FirstSeen => ranked.sort_by(|a, b| by_score_desc(a.1, b.1)),
            TieBreak::Lexicographic => {
                ranked.sort_by(|a, b| by_score_desc(a.1, b.1).then_with(|| a.0.cmp(b.0)))
            }
        }

        ranked
            .into_iter()
            .take(k)
            .map(|(token, score)| (token.clone(), score))
            .collect()
    }
}

#[inline]
fn by_score_desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Multiply each term frequency by its IDF weight
fn weigh(tf: &TermScores, idf: &TermScores) -> Result<TermScores> {
    tf.iter()
        .map(|(token, &freq)| {
            let weight = idf.get(token).ok_or_else(|| TfIdfError::UnknownToken {
                token: token.clone(),
            })?;
            Ok((token.clone(), freq * weight))
        })
        .collect()
}

/// Score `documents` with the default scorer
pub fn compute_tf_idf<T: AsRef<str>>(documents: &[T], mode: Mode) -> Result<TfIdfResult> {
    TfIdfScorer::default().compute_tf_idf(documents, mode)
}

/// Select top keywords with the default scorer
pub fn top_keywords(result: &TfIdfResult, k: impl Into<TopK>, mode: Mode) -> Result<Keywords> {
    TfIdfScorer::default().top_keywords(result, k, mode)
}

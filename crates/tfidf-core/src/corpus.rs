//! Tokenized documents and the corpus they form

use ahash::AHashSet;
use serde::Serialize;
use tracing::debug;

use crate::tokenizer::Tokenizer;

/// A tokenized document. Tokens keep their original order and duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    tokens: Vec<String>,
}

impl Document {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Tokenize one raw text
    pub fn from_text(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::new(tokenizer.tokenize(text))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Documents in input order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Tokenize every text, preserving input order
    pub fn from_texts<T: AsRef<str>>(texts: &[T], tokenizer: &Tokenizer) -> Self {
        let documents: Vec<Document> = texts
            .iter()
            .map(|text| Document::from_text(text.as_ref(), tokenizer))
            .collect();
        debug!(num_docs = documents.len(), "Tokenized corpus");
        Self::new(documents)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get corpus statistics
    pub fn stats(&self) -> CorpusStats {
        let vocabulary: AHashSet<&str> = self
            .documents
            .iter()
            .flat_map(|doc| doc.tokens().iter().map(String::as_str))
            .collect();
        let total_len: usize = self.documents.iter().map(Document::len).sum();

        CorpusStats {
            num_docs: self.documents.len(),
            num_terms: vocabulary.len(),
            avg_doc_len: if self.documents.is_empty() {
                0.0
            } else {
                total_len as f64 / self.documents.len() as f64
            },
            empty_docs: self.documents.iter().filter(|doc| doc.is_empty()).count(),
        }
    }
}

/// Corpus statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub num_docs: usize,
    /// Distinct tokens across all documents
    pub num_terms: usize,
    pub avg_doc_len: f64,
    pub empty_docs: usize,
}

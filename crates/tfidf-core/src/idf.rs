//! Document frequency and inverse document frequency
//!
//! IDF is `ln(N / (df + 1))` where `N` is the number of documents. The `+1`
//! means a token present in every document gets a negative weight.

use ahash::AHashSet;
use indexmap::IndexMap;
use tracing::debug;

use crate::corpus::Corpus;
use crate::tf::TermScores;

/// IDF weight for a token seen in `doc_freq` of `doc_count` documents
#[inline]
pub fn idf_weight(doc_count: usize, doc_freq: usize) -> f64 {
    (doc_count as f64 / (doc_freq as f64 + 1.0)).ln()
}

/// Count the documents containing each token, in corpus first-seen order.
///
/// Each document contributes at most one per token.
pub fn document_frequency(corpus: &Corpus) -> IndexMap<String, usize> {
    let mut df: IndexMap<String, usize> = IndexMap::new();
    for doc in corpus.documents() {
        let mut seen = AHashSet::with_capacity(doc.len());
        for token in doc.tokens() {
            if seen.insert(token.as_str()) {
                *df.entry(token.clone()).or_insert(0) += 1;
            }
        }
    }
    df
}

/// Compute the IDF map over the union of all corpus tokens
pub fn inverse_document_frequency(corpus: &Corpus) -> TermScores {
    let doc_count = corpus.len();
    let idf: TermScores = document_frequency(corpus)
        .into_iter()
        .map(|(token, df)| (token, idf_weight(doc_count, df)))
        .collect();
    debug!(num_docs = doc_count, num_terms = idf.len(), "Computed IDF");
    idf
}

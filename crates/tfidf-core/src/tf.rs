//! Term frequency: occurrence count divided by document length

use indexmap::IndexMap;

use crate::corpus::Document;

/// Token to score mapping, in first-appearance order.
pub type TermScores = IndexMap<String, f64>;

/// Compute normalized term frequencies for one document.
///
/// An empty document yields an empty map.
pub fn term_frequency(doc: &Document) -> TermScores {
    if doc.is_empty() {
        return TermScores::new();
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for token in doc.tokens() {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let total = doc.len() as f64;
    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f64 / total))
        .collect()
}

//! tfidf-core - TF-IDF keyword scoring for small corpora
//!
//! Tokenizes short documents, weighs every token by term frequency times
//! inverse document frequency, and extracts the top keywords either per
//! document or aggregated across the corpus.
//!
//! ```
//! use tfidf_core::{compute_tf_idf, top_keywords, Keywords, Mode};
//!
//! let reviews = ["This is the first review", "Here is another review", "A third one"];
//! let scores = compute_tf_idf(&reviews, Mode::All).unwrap();
//! let keywords = top_keywords(&scores, 3usize, Mode::All).unwrap();
//! assert_eq!(keywords, Keywords::All(vec!["third".into(), "one".into(), "this".into()]));
//! ```

pub mod corpus;
pub mod error;
pub mod idf;
pub mod params;
pub mod scorer;
pub mod tf;
pub mod tokenizer;

pub use corpus::{Corpus, CorpusStats, Document};
pub use error::{Result, TfIdfError};
pub use params::{TfIdfParams, TieBreak, DEFAULT_STOPWORDS};
pub use scorer::{compute_tf_idf, top_keywords, Keywords, Mode, TfIdfResult, TfIdfScorer, TopK};
pub use tf::TermScores;
pub use tokenizer::Tokenizer;

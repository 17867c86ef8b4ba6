// End-to-end tests for the scoring pipeline through the public API.

use anyhow::{bail, Result};

use tfidf_core::tf::term_frequency;
use tfidf_core::{
    compute_tf_idf, top_keywords, Corpus, Keywords, Mode, TermScores, TfIdfError, TfIdfParams,
    TfIdfResult, TfIdfScorer, TopK, Tokenizer,
};

const MOVIES: [&str; 5] = [
    "The plot is slow and the acting is wooden",
    "Great acting and a great soundtrack",
    "Slow start but the ending is great",
    "The soundtrack alone is worth it",
    "the and is a",
];

fn single(result: TfIdfResult) -> Result<Vec<TermScores>> {
    match result {
        TfIdfResult::Single(docs) => Ok(docs),
        other => bail!("expected single mode result, got {:?}", other.mode()),
    }
}

fn aggregate(result: TfIdfResult) -> Result<TermScores> {
    match result {
        TfIdfResult::All(scores) => Ok(scores),
        other => bail!("expected all mode result, got {:?}", other.mode()),
    }
}

#[test]
fn aggregate_equals_sum_of_single() -> Result<()> {
    let docs = single(compute_tf_idf(&MOVIES, Mode::Single)?)?;
    let all = aggregate(compute_tf_idf(&MOVIES, Mode::All)?)?;

    for (token, &score) in &all {
        let expected: f64 = docs.iter().filter_map(|doc| doc.get(token)).sum();
        assert!(
            (score - expected).abs() < 1e-12,
            "{token}: aggregate {score} != sum {expected}"
        );
    }

    let distinct: usize = Corpus::from_texts(&MOVIES, &Tokenizer::default())
        .stats()
        .num_terms;
    assert_eq!(all.len(), distinct);
    Ok(())
}

#[test]
fn term_frequencies_sum_to_one() {
    let corpus = Corpus::from_texts(&MOVIES, &Tokenizer::default());
    for doc in corpus.documents() {
        let sum: f64 = term_frequency(doc).values().sum();
        if doc.is_empty() {
            assert_eq!(sum, 0.0);
        } else {
            assert!((sum - 1.0).abs() < 1e-12, "TF sums to {sum}");
        }
    }
}

#[test]
fn repeated_runs_are_bit_identical() -> Result<()> {
    for mode in [Mode::Single, Mode::All] {
        let first = compute_tf_idf(&MOVIES, mode)?;
        let second = compute_tf_idf(&MOVIES, mode)?;
        assert_eq!(serde_json::to_string(&first)?, serde_json::to_string(&second)?);

        let bits = |result: &TfIdfResult| -> Vec<(String, u64)> {
            let maps: Vec<&TermScores> = match result {
                TfIdfResult::Single(docs) => docs.iter().collect(),
                TfIdfResult::All(scores) => vec![scores],
            };
            maps.into_iter()
                .flat_map(|m| m.iter().map(|(t, s)| (t.clone(), s.to_bits())))
                .collect()
        };
        assert_eq!(bits(&first), bits(&second));

        let k1 = top_keywords(&first, 4usize, mode)?;
        let k2 = top_keywords(&second, 4usize, mode)?;
        assert_eq!(k1, k2);
    }
    Ok(())
}

#[test]
fn oversized_k_returns_everything_once() -> Result<()> {
    let docs = single(compute_tf_idf(&MOVIES, Mode::Single)?)?;
    let result = TfIdfResult::Single(docs.clone());
    let Keywords::Single(ranked) = top_keywords(&result, 1000usize, Mode::Single)? else {
        bail!("expected single mode keywords");
    };

    assert_eq!(ranked.len(), docs.len());
    for (doc, ranked) in docs.iter().zip(&ranked) {
        assert_eq!(ranked.len(), doc.len());
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }
    assert!(ranked[4].is_empty());
    Ok(())
}

#[test]
fn common_words_rank_below_rare_ones() -> Result<()> {
    let result = compute_tf_idf(&MOVIES, Mode::Single)?;
    let Keywords::Single(ranked) = top_keywords(&result, TopK::new(100), Mode::Single)? else {
        bail!("expected single mode keywords");
    };
    let tokens: Vec<&str> = ranked[2].iter().map(|(t, _)| t.as_str()).collect();

    // "slow" and "great" appear in two documents, the rest of the review in one
    assert_eq!(tokens, vec!["start", "but", "ending", "slow", "great"]);
    Ok(())
}

#[test]
fn custom_params_from_json() -> Result<()> {
    let params = TfIdfParams::from_json(
        r#"{"stopwords": ["the", "and", "is", "a", "but", "it"], "tie_break": "lexicographic"}"#,
    )?;
    let scorer = TfIdfScorer::new(params);

    assert!(scorer.tokenizer().is_stopword("but"));
    assert!(!scorer.tokenizer().is_stopword("of"));

    let result = scorer.compute_tf_idf(&MOVIES, Mode::All)?;
    let Keywords::All(tokens) = scorer.top_keywords(&result, 3usize, Mode::All)? else {
        bail!("expected all mode keywords");
    };
    assert_eq!(tokens.len(), 3);
    assert!(!tokens.iter().any(|t| t == "but"));
    Ok(())
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(matches!(
        TopK::try_from(-3i64),
        Err(TfIdfError::InvalidK { .. })
    ));
    assert!(matches!(
        "sideways".parse::<Mode>(),
        Err(TfIdfError::InvalidMode { .. })
    ));

    let strict = TfIdfScorer::new(TfIdfParams::default().with_allow_empty_documents(false));
    assert!(matches!(
        strict.compute_tf_idf(&MOVIES, Mode::Single),
        Err(TfIdfError::EmptyDocument { index: 4 })
    ));
}

#[test]
fn results_serialize_to_json() -> Result<()> {
    let reviews = ["This is the first review", "Here is another review", "A third one"];
    let result = compute_tf_idf(&reviews, Mode::Single)?;
    let keywords = top_keywords(&result, 2usize, Mode::Single)?;

    let value: serde_json::Value = serde_json::to_value(&keywords)?;
    assert_eq!(value[0][0][0], "this");
    assert_eq!(value[1][0][0], "here");
    assert_eq!(value[2][0][0], "third");

    let score = |doc: usize, rank: usize| value[doc][rank][1].as_f64().unwrap_or(f64::NAN);
    assert!((score(0, 0) - 0.135_155_036_036_054_8).abs() < 1e-12);
    assert!((score(2, 0) - 0.202_732_554_054_082_2).abs() < 1e-12);
    assert!(score(2, 0) > score(0, 0));
    assert!(score(0, 0) > 0.0);

    let all = compute_tf_idf(&reviews, Mode::All)?;
    let keywords = top_keywords(&all, 3usize, Mode::All)?;
    assert_eq!(
        serde_json::to_value(&keywords)?,
        serde_json::json!(["third", "one", "this"])
    );
    Ok(())
}

pub(crate) use super::*;

fn corpus(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| format!("<{w}>")).collect()
}

fn batch(sentences: &[&[&str]]) -> Vec<Vec<String>> {
    sentences.iter().map(|s| corpus(s)).collect()
}

#[test]
fn test_fit_builds_vocabulary() {
    let mut vectorizer = CharNGramVectorizer::new().with_min_df(1);
    vectorizer.fit(&corpus(&["cat", "cats"])).expect("fit");

    let vocab = vectorizer.vocabulary().expect("fitted");
    assert!(vocab.contains_key("c"));
    assert!(vocab.contains_key("<cat"));
    assert!(vocab.contains_key("ats>"));
    // Indices are dense in [0, vocab_size).
    let mut indices: Vec<usize> = vocab.values().copied().collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..vocab.len()).collect::<Vec<_>>());
}

#[test]
fn test_min_df_prunes_rare_ngrams() {
    let mut vectorizer = CharNGramVectorizer::new().with_min_df(2);
    vectorizer.fit(&corpus(&["cat", "cats", "dog"])).expect("fit");

    let vocab = vectorizer.vocabulary().expect("fitted");
    // "cat" appears in two tokens, "dog" n-grams only in one.
    assert!(vocab.contains_key("cat"));
    assert!(!vocab.contains_key("dog"));
    assert!(!vocab.contains_key("g"));
}

#[test]
fn test_max_df_prunes_ubiquitous_ngrams() {
    let mut vectorizer = CharNGramVectorizer::new().with_min_df(1).with_max_df(0.5);
    vectorizer
        .fit(&corpus(&["cat", "car", "cod", "dim"]))
        .expect("fit");

    let vocab = vectorizer.vocabulary().expect("fitted");
    // Boundary markers appear in every token: df 4 > ceil(0.5 * 4) = 2.
    assert!(!vocab.contains_key("<"));
    assert!(!vocab.contains_key(">"));
    // "ca" appears in 2 of 4 tokens, exactly at the cap.
    assert!(vocab.contains_key("ca"));
}

#[test]
fn test_max_features_caps_by_frequency_then_lexicographic() {
    let mut vectorizer = CharNGramVectorizer::new()
        .with_ngram_range(1, 1)
        .with_min_df(1)
        .with_max_features(3);
    // df: "a" -> 3, "b" -> 2, "c" -> 2, "d" -> 1 (plus markers df 3)
    vectorizer.fit(&corpus(&["ab", "ac", "abcd"])).expect("fit");

    let vocab = vectorizer.vocabulary().expect("fitted");
    assert_eq!(vocab.len(), 3);
    // Ties at df 3: "<", ">", "a" sorted lexicographically fill the cap.
    assert_eq!(vocab.get("<"), Some(&0));
    assert_eq!(vocab.get(">"), Some(&1));
    assert_eq!(vocab.get("a"), Some(&2));
}

#[test]
fn test_fit_is_deterministic() {
    let tokens = corpus(&["started", "starting", "star", "stars", "restart"]);
    let mut a = CharNGramVectorizer::new().with_min_df(1);
    let mut b = CharNGramVectorizer::new().with_min_df(1);
    a.fit(&tokens).expect("fit");
    b.fit(&tokens).expect("fit");
    assert_eq!(a.vocabulary(), b.vocabulary());
}

#[test]
fn test_transform_before_fit_fails() {
    let vectorizer = CharNGramVectorizer::new();
    let err = vectorizer
        .transform(&batch(&[&["cat"]]))
        .expect_err("must require fit");
    assert!(matches!(err, crate::error::ProyectarError::NotFitted { .. }));
}

#[test]
fn test_transform_shapes_preserve_raggedness() {
    let mut vectorizer = CharNGramVectorizer::new().with_min_df(1);
    vectorizer.fit(&corpus(&["cat", "dog", "bird"])).expect("fit");

    let matrices = vectorizer
        .transform(&batch(&[&["cat", "dog"], &[], &["bird"]]))
        .expect("transform");
    assert_eq!(matrices.len(), 3);
    assert_eq!(matrices[0].n_rows(), 2);
    assert_eq!(matrices[1].n_rows(), 0);
    assert_eq!(matrices[2].n_rows(), 1);
    for m in &matrices {
        assert_eq!(m.n_cols(), vectorizer.vocabulary_size());
    }
}

#[test]
fn test_transform_counts_repeated_ngrams() {
    let mut vectorizer = CharNGramVectorizer::new()
        .with_ngram_range(1, 1)
        .with_min_df(1);
    vectorizer.fit(&corpus(&["aa", "ab"])).expect("fit");

    let matrices = vectorizer.transform(&batch(&[&["aaa"]])).expect("transform");
    let vocab = vectorizer.vocabulary().expect("fitted");
    let col_a = vocab["a"];
    assert_eq!(matrices[0].get(0, col_a), 3.0);
}

#[test]
fn test_oov_token_yields_zero_row() {
    let mut vectorizer = CharNGramVectorizer::new().with_min_df(1);
    vectorizer.fit(&corpus(&["cat", "cap"])).expect("fit");

    // No character overlap with the corpus beyond markers.
    let matrices = vectorizer.transform(&batch(&[&["zzz"]])).expect("transform");
    let (cols, _) = matrices[0].row(0);
    let vocab = vectorizer.vocabulary().expect("fitted");
    // Only boundary-marker n-grams can match.
    for &c in cols {
        let ngram = vocab.iter().find(|&(_, &i)| i == c).map(|(g, _)| g.clone());
        let ngram = ngram.expect("column in vocabulary");
        assert!(ngram.contains('<') || ngram.contains('>'));
    }
}

#[test]
fn test_transform_idempotent() {
    let mut vectorizer = CharNGramVectorizer::new().with_min_df(1);
    vectorizer.fit(&corpus(&["cat", "cats"])).expect("fit");

    let input = batch(&[&["cat"], &["cats", "cat"]]);
    let first = vectorizer.transform(&input).expect("transform");
    let second = vectorizer.transform(&input).expect("transform");
    assert_eq!(first, second);
}

#[test]
fn test_invalid_ngram_range_rejected() {
    let mut vectorizer = CharNGramVectorizer::new().with_ngram_range(3, 2);
    let err = vectorizer.fit(&corpus(&["cat"])).expect_err("invalid range");
    assert!(matches!(
        err,
        crate::error::ProyectarError::InvalidHyperparameter { .. }
    ));
}

#[test]
fn test_invalid_max_df_rejected() {
    let mut vectorizer = CharNGramVectorizer::new().with_max_df(1.5);
    assert!(vectorizer.fit(&corpus(&["cat"])).is_err());
}

#[test]
fn test_empty_corpus_fits_empty_vocabulary() {
    let mut vectorizer = CharNGramVectorizer::new();
    vectorizer.fit(&[]).expect("fit on empty corpus");
    assert!(vectorizer.is_fitted());
    assert_eq!(vectorizer.vocabulary_size(), 0);
}

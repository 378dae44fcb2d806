pub(crate) use super::*;
pub(crate) use crate::text::similarity::cosine_similarity;

fn small_projector() -> WordProjector {
    WordProjector::new()
        .with_splitter(SentenceSplitter::new().with_min_len(1))
        .with_vectorizer(CharNGramVectorizer::new().with_min_df(1))
        .with_projection_bank(
            ProjectionBank::new()
                .with_n_projections(8)
                .with_n_components(6)
                .with_random_state(42),
        )
}

#[test]
fn test_default_output_dim() {
    let projector = WordProjector::new();
    assert_eq!(projector.output_dim(), 1120);
}

#[test]
fn test_transform_before_fit_fails() {
    let projector = WordProjector::new();
    let err = projector.transform(&["some text here."]).expect_err("unfitted");
    assert!(matches!(err, crate::error::ProyectarError::NotFitted { .. }));
}

#[test]
fn test_shape_law() {
    let mut projector = small_projector();
    projector
        .fit(&["the cat sat on the mat. dogs bark at cats."])
        .expect("fit");

    let matrices = projector
        .transform(&["the cat sat here. dogs bark loud.", "cats nap."])
        .expect("transform");
    assert_eq!(matrices.len(), 3);
    assert_eq!(matrices[0].n_rows(), 4); // the cat sat here.
    assert_eq!(matrices[1].n_rows(), 3); // dogs bark loud.
    assert_eq!(matrices[2].n_rows(), 2); // cats nap.
    for m in &matrices {
        assert_eq!(m.n_cols(), 48);
    }
}

#[test]
fn test_empty_input_degrades_to_empty_output() {
    let mut projector = small_projector();
    projector.fit(&["plenty of words to build a vocabulary."]).expect("fit");

    assert!(projector.transform(&[]).expect("transform").is_empty());
    assert!(projector.transform(&[""]).expect("transform").is_empty());
    assert!(projector.transform(&["   \n  "]).expect("transform").is_empty());
}

#[test]
fn test_oov_words_never_fail() {
    let mut projector = small_projector();
    projector.fit(&["the cat sat on the mat."]).expect("fit");

    let matrices = projector
        .transform_words(&["zzzqqq", "cat"])
        .expect("transform");
    assert_eq!(matrices.len(), 2);
    // OOV word still yields a well-shaped row (zero apart from marker n-grams).
    assert_eq!(matrices[0].shape(), (1, 48));
}

#[test]
fn test_fit_determinism_across_instances() {
    let corpus = ["the cat sat on the mat. dogs bark at cats all night."];
    let mut a = small_projector();
    let mut b = small_projector();
    a.fit(&corpus).expect("fit");
    b.fit(&corpus).expect("fit");

    let input = ["cats and dogs sat on mats."];
    assert_eq!(
        a.transform(&input).expect("transform"),
        b.transform(&input).expect("transform")
    );
}

#[test]
fn test_transform_idempotent() {
    let mut projector = small_projector();
    projector.fit(&["the cat sat on the mat."]).expect("fit");

    let input = ["the mat sat on the cat."];
    let first = projector.transform(&input).expect("transform");
    let second = projector.transform(&input).expect("transform");
    assert_eq!(first, second);
}

#[test]
fn test_high_similarity_pair() {
    // Defaults: ngram range (1,4), min_df 2, T=80, d=14 -> 1120 columns.
    let mut projector = WordProjector::new();
    projector
        .fit_words(&["started", "starting", "star"])
        .expect("fit");

    let matrices = projector
        .transform_words(&["start", "started"])
        .expect("transform");
    assert_eq!(matrices.len(), 2);
    assert_eq!(matrices[0].shape(), (1, 1120));
    assert_eq!(matrices[1].shape(), (1, 1120));

    let sim = cosine_similarity(&matrices[0], 0, &matrices[1], 0).expect("same width");
    assert!(sim > 0.5, "cos(start, started) = {sim}");
}

#[test]
fn test_low_similarity_pair_ranks_below_high() {
    // min_df 1 so the single-occurrence n-grams of "ab"/"ae" enter the
    // vocabulary; the two words then overlap only on 1-grams.
    let mut projector = WordProjector::new()
        .with_vectorizer(CharNGramVectorizer::new().with_min_df(1));
    projector
        .fit_words(&["started", "starting", "star", "ab", "ae"])
        .expect("fit");

    let matrices = projector
        .transform_words(&["start", "started", "ab", "ae"])
        .expect("transform");
    let high = cosine_similarity(&matrices[0], 0, &matrices[1], 0).expect("same width");
    let low = cosine_similarity(&matrices[2], 0, &matrices[3], 0).expect("same width");
    assert!(
        low < high,
        "cos(ab, ae) = {low} should be below cos(start, started) = {high}"
    );
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("projector.json");

    let mut projector = small_projector();
    projector
        .fit(&["the cat sat on the mat. dogs bark at cats."])
        .expect("fit");
    projector.save(&path).expect("save");

    let restored = WordProjector::load(&path).expect("load");
    assert!(restored.is_fitted());
    assert_eq!(restored.vocabulary_size(), projector.vocabulary_size());

    let input = ["cats sat barking on dog mats."];
    assert_eq!(
        projector.transform(&input).expect("transform"),
        restored.transform(&input).expect("transform")
    );
}

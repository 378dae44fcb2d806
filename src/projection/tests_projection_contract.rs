// =========================================================================
// FALSIFY-RP: random-projection contract (proyectar ProjectionBank)
//
// Claims under test:
//   - projected width is exactly T*d for every input row count
//   - the map is linear: zero in, zero out; scaling commutes
//   - with s=1 and T*d large, cosine similarity between two count vectors
//     is approximately preserved (Johnson-Lindenstrauss)
//   - distortion shrinks as T*d grows
//
// References:
//   - Achlioptas (2003) "Database-friendly random projections"
//   - Li, Hastie & Church (2006) "Very sparse random projections"
// =========================================================================

use super::*;
use crate::text::similarity::cosine_similarity;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two random sparse non-negative count rows over `width` columns.
fn random_count_pair(width: usize, seed: u64) -> CsrMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = (0..2)
        .map(|_| {
            (0..width)
                .filter_map(|c| {
                    if rng.gen_range(0.0..1.0) < 0.3 {
                        Some((c, rng.gen_range(1..5) as f32))
                    } else {
                        None
                    }
                })
                .collect()
        })
        .collect();
    CsrMatrix::from_rows(rows, width).expect("valid indices")
}

/// Absolute cosine distortion of one pair under a fresh bank.
fn distortion(t: usize, d: usize, pair_seed: u64, bank_seed: u64) -> f32 {
    let width = 30;
    let counts = random_count_pair(width, pair_seed);
    let raw = cosine_similarity(&counts, 0, &counts, 1).expect("same width");

    let mut bank = ProjectionBank::new()
        .with_n_projections(t)
        .with_n_components(d)
        .with_sparsity(1.0)
        .with_random_state(bank_seed);
    bank.fit(width).expect("fit");
    let projected = bank.transform(&[counts]).expect("transform");
    let approx = cosine_similarity(&projected[0], 0, &projected[0], 1).expect("same width");

    (raw - approx).abs()
}

/// FALSIFY-RP-001: cosine similarity preserved within bounded distortion
/// when T*d is large relative to the input width.
#[test]
fn falsify_rp_001_cosine_preserved() {
    for pair_seed in 0..5u64 {
        let err = distortion(40, 25, pair_seed, 1000 + pair_seed);
        assert!(
            err < 0.25,
            "FALSIFIED RP-001: distortion {err} >= 0.25 at T*d = 1000"
        );
    }
}

/// FALSIFY-RP-002: mean distortion shrinks as T*d grows.
#[test]
fn falsify_rp_002_distortion_shrinks() {
    let pairs = 40u64;
    let mean = |t: usize, d: usize| -> f32 {
        (0..pairs)
            .map(|s| distortion(t, d, s, 777 + s))
            .sum::<f32>()
            / pairs as f32
    };

    let coarse = mean(8, 4); // T*d = 32
    let fine = mean(128, 16); // T*d = 2048
    assert!(
        fine < coarse,
        "FALSIFIED RP-002: distortion did not shrink ({coarse} -> {fine})"
    );
}

/// FALSIFY-RP-003: scaling a count vector scales its projection (linearity).
#[test]
fn falsify_rp_003_linearity() {
    let width = 20;
    let mut bank = ProjectionBank::new()
        .with_n_projections(6)
        .with_n_components(5)
        .with_random_state(4);
    bank.fit(width).expect("fit");

    let x = CsrMatrix::from_rows(vec![vec![(2, 1.0), (11, 3.0)]], width).expect("valid");
    let x3 = CsrMatrix::from_rows(vec![vec![(2, 3.0), (11, 9.0)]], width).expect("valid");

    let px = bank.transform(&[x]).expect("transform");
    let px3 = bank.transform(&[x3]).expect("transform");

    let dense = px[0].to_dense();
    let dense3 = px3[0].to_dense();
    for (a, b) in dense.iter().zip(&dense3) {
        assert!(
            (3.0 * a - b).abs() < 1e-4,
            "FALSIFIED RP-003: projection is not linear"
        );
    }
}

mod rp_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    /// FALSIFY-RP-004-prop: projected shape is (rows, T*d) for random
    /// configurations and row counts.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(15))]

        #[test]
        fn falsify_rp_004_prop_shape(
            t in 1..=6usize,
            d in 1..=8usize,
            rows in 0..=5usize,
            seed in 0..100u64,
        ) {
            let width = 12;
            let mut bank = ProjectionBank::new()
                .with_n_projections(t)
                .with_n_components(d)
                .with_random_state(seed);
            bank.fit(width).expect("fit");

            let entries = (0..rows).map(|r| vec![(r % width, 1.0)]).collect();
            let counts = CsrMatrix::from_rows(entries, width).expect("valid");
            let projected = bank.transform(&[counts]).expect("transform");
            prop_assert_eq!(
                projected[0].shape(),
                (rows, t * d),
                "FALSIFIED RP-004-prop: wrong projected shape"
            );
        }
    }

    /// FALSIFY-RP-005-prop: bounded distortion for random word pairs at
    /// T*d = 1000 over a 30-wide input.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn falsify_rp_005_prop_bounded_distortion(
            pair_seed in 0..500u64,
            bank_seed in 0..500u64,
        ) {
            let err = super::distortion(40, 25, pair_seed, bank_seed);
            prop_assert!(
                err < 0.3,
                "FALSIFIED RP-005-prop: distortion {} >= 0.3", err
            );
        }
    }
}

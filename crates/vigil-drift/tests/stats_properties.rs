use std::collections::HashMap;

use proptest::prelude::*;
use vigil_drift::stats::{chi_square, ks};

fn arb_sample() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..64)
}

proptest! {
    // ── KS statistic and p-value are bounded ─────────────────────────────

    #[test]
    fn ks_statistic_and_p_value_are_bounded(a in arb_sample(), b in arb_sample()) {
        let result = ks::two_sample(&a, &b);
        prop_assert!((0.0..=1.0).contains(&result.statistic));
        prop_assert!((0.0..=1.0).contains(&result.p_value));
    }

    // ── A sample compared to itself has zero distance ────────────────────

    #[test]
    fn ks_self_comparison_is_zero(a in arb_sample()) {
        let result = ks::two_sample(&a, &a);
        prop_assert_eq!(result.statistic, 0.0);
        prop_assert_eq!(result.p_value, 1.0);
    }

    // ── Disjoint samples reach full distance ─────────────────────────────

    #[test]
    fn ks_disjoint_samples_reach_one(a in prop::collection::vec(0.0f64..1.0, 5..32)) {
        let shifted: Vec<f64> = a.iter().map(|v| v + 100.0).collect();
        let result = ks::two_sample(&a, &shifted);
        prop_assert!((result.statistic - 1.0).abs() < 1e-12);
    }

    // ── Chi-square distance is bounded and self-fit is perfect ───────────

    #[test]
    fn chi_square_distance_is_bounded(
        counts in prop::collection::hash_map("[a-e]", 1u64..500, 2..5),
    ) {
        let reference: HashMap<String, u64> = counts.clone();
        let result = chi_square::goodness_of_fit(&reference, &counts);
        prop_assert!((0.0..=1.0).contains(&result.distance));
        prop_assert!((0.0..=1.0).contains(&result.p_value));
        // Identical tables fit perfectly.
        prop_assert!(result.chi2.abs() < 1e-9);
        prop_assert!(result.distance < 1e-9);
    }
}

// ── Tie groups across both samples ───────────────────────────────────────

#[test]
fn shared_value_with_different_multiplicities_has_zero_distance() {
    // Both ECDFs step to 1.0 at the same point; the walk must consume the
    // whole tie group on each side before sampling the difference.
    let result = ks::two_sample(&[1.0, 1.0], &[1.0]);
    assert_eq!(result.statistic, 0.0);
    assert_eq!(result.p_value, 1.0);
}

#[test]
fn tied_boundary_value_does_not_inflate_the_statistic() {
    // ECDFs agree at 2.0 (0.5 vs 0.5) and differ nowhere else.
    let result = ks::two_sample(&[1.0, 2.0, 2.0, 3.0], &[2.0, 3.0]);
    assert!(result.statistic <= 0.25 + 1e-12);
}

// ── Undefined fit: zero expected count ───────────────────────────────────

#[test]
fn chi_square_unseen_category_is_undefined_and_drifted() {
    let mut reference = HashMap::new();
    reference.insert("card".to_string(), 90u64);
    reference.insert("wire".to_string(), 10u64);
    let mut observed = HashMap::new();
    observed.insert("crypto".to_string(), 5u64);

    let result = chi_square::goodness_of_fit(&reference, &observed);
    assert!(result.chi2.is_nan());
    assert_eq!(result.p_value, 0.0);
    assert_eq!(result.distance, 1.0);
}

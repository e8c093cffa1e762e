//! Chi-square goodness-of-fit test for categorical features.
//!
//! Observed batch counts against expected counts scaled from the reference
//! frequency table. The raw χ² is unbounded, so the detector aggregates on a
//! normalized distance (Cramér's V) that shares the [0, 1] severity scale
//! with the KS statistic.

use std::collections::HashMap;

use super::gamma::gamma_q;

/// Outcome of one goodness-of-fit test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareResult {
    /// Raw Pearson χ². NaN when any expected-category count is zero, in
    /// which case the fit is undefined and the feature drifts by definition.
    pub chi2: f64,
    pub p_value: f64,
    /// Cramér's V: sqrt(χ² / (n · (k − 1))), clamped to [0, 1].
    pub distance: f64,
}

impl ChiSquareResult {
    /// The undefined-fit case: a category observed in the batch has zero
    /// expected frequency in the reference.
    fn undefined() -> Self {
        Self {
            chi2: f64::NAN,
            p_value: 0.0,
            distance: 1.0,
        }
    }
}

/// Test observed batch category counts against the reference frequency
/// table. Both tables must be non-empty; the detector guards that.
pub fn goodness_of_fit(
    reference_counts: &HashMap<String, u64>,
    observed_counts: &HashMap<String, u64>,
) -> ChiSquareResult {
    let ref_total: u64 = reference_counts.values().sum();
    let obs_total: u64 = observed_counts.values().sum();
    debug_assert!(ref_total > 0 && obs_total > 0);

    // A batch category absent from the reference has expected count zero:
    // the fit is undefined rather than an error.
    let unseen = observed_counts
        .iter()
        .any(|(cat, count)| *count > 0 && reference_counts.get(cat).copied().unwrap_or(0) == 0);
    if unseen {
        return ChiSquareResult::undefined();
    }

    let k = reference_counts.iter().filter(|(_, c)| **c > 0).count();
    if k < 2 {
        // Single-category reference with no unseen batch categories: the
        // batch trivially fits.
        return ChiSquareResult {
            chi2: 0.0,
            p_value: 1.0,
            distance: 0.0,
        };
    }

    let mut chi2 = 0.0;
    for (category, ref_count) in reference_counts {
        if *ref_count == 0 {
            continue;
        }
        let expected = *ref_count as f64 / ref_total as f64 * obs_total as f64;
        let observed = observed_counts.get(category).copied().unwrap_or(0) as f64;
        chi2 += (observed - expected).powi(2) / expected;
    }

    let df = (k - 1) as f64;
    let p_value = gamma_q(df / 2.0, chi2 / 2.0).clamp(0.0, 1.0);
    let distance = (chi2 / (obs_total as f64 * df)).sqrt().clamp(0.0, 1.0);
    ChiSquareResult {
        chi2,
        p_value,
        distance,
    }
}

//! Two-sample Kolmogorov–Smirnov test.
//!
//! Statistic D = max |ECDF₁(x) − ECDF₂(x)| over the merged sample, in [0, 1]
//! and independent of any bin choice. p-value from the asymptotic Kolmogorov
//! distribution with the small-sample effective-n correction.

use vigil_core::constants::KOLMOGOROV_SERIES_TERMS;

/// Outcome of one two-sample KS test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KsResult {
    /// Max absolute ECDF difference, in [0, 1].
    pub statistic: f64,
    pub p_value: f64,
}

/// Compare two empirical distributions. Both samples must be non-empty; the
/// detector guards that before dispatching here.
pub fn two_sample(reference: &[f64], batch: &[f64]) -> KsResult {
    debug_assert!(!reference.is_empty() && !batch.is_empty());

    let mut a = reference.to_vec();
    let mut b = batch.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let mut i = 0;
    let mut j = 0;
    let mut statistic: f64 = 0.0;

    // Walk the merged order one distinct value at a time, consuming the
    // whole tie group on each side before sampling the ECDF difference.
    // A value shared with different multiplicities must not inflate D.
    while i < a.len() && j < b.len() {
        let x = if a[i].total_cmp(&b[j]).is_le() { a[i] } else { b[j] };
        while i < a.len() && a[i].total_cmp(&x).is_eq() {
            i += 1;
        }
        while j < b.len() && b[j].total_cmp(&x).is_eq() {
            j += 1;
        }
        let diff = (i as f64 / n1 - j as f64 / n2).abs();
        if diff > statistic {
            statistic = diff;
        }
    }

    let effective_n = (n1 * n2 / (n1 + n2)).sqrt();
    let lambda = (effective_n + 0.12 + 0.11 / effective_n) * statistic;
    KsResult {
        statistic,
        p_value: kolmogorov_q(lambda),
    }
}

/// Q_KS(λ) = 2 Σ_{j≥1} (−1)^{j−1} exp(−2 j² λ²), clamped to [0, 1].
fn kolmogorov_q(lambda: f64) -> f64 {
    if lambda <= 0.0 {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut sign = 1.0;
    let two_lambda_sq = 2.0 * lambda * lambda;
    for j in 1..=KOLMOGOROV_SERIES_TERMS {
        let term = sign * 2.0 * (-two_lambda_sq * (j * j) as f64).exp();
        sum += term;
        if term.abs() < 1.0e-12 {
            break;
        }
        sign = -sign;
    }
    sum.clamp(0.0, 1.0)
}

//! Drift verdict models — per-feature scores and the aggregate verdict.

use serde::{Deserialize, Serialize};

use crate::models::Severity;

/// Result of one per-feature distribution test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftScore {
    /// Feature name.
    pub feature: String,
    /// Normalized distance statistic in [0, 1] (KS D for numeric features,
    /// Cramér's V for categorical features).
    pub statistic: f64,
    /// p-value of the test. 0.0 when the test was undefined and the feature
    /// was declared drifted by definition.
    pub p_value: f64,
    /// Thresholded drift flag: p-value below the significance threshold OR
    /// statistic above the magnitude threshold for the feature's type.
    pub drifted: bool,
}

/// Aggregate verdict for one detection run.
///
/// Carries no timestamps: `detect` is a pure function of its inputs, so the
/// same batch and snapshot always produce the same verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftVerdict {
    /// Maximum per-feature distance statistic (worst feature drives the
    /// verdict).
    pub overall_score: f64,
    /// Names of drifted features, sorted ascending.
    pub drifted_features: Vec<String>,
    /// Severity bucketed from `overall_score`.
    pub severity: Severity,
    /// Per-feature scores, sorted by feature name.
    pub scores: Vec<DriftScore>,
}

impl DriftVerdict {
    pub fn has_drift(&self) -> bool {
        !self.drifted_features.is_empty()
    }
}

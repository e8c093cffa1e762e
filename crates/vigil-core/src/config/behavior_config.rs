use serde::{Deserialize, Serialize};

use super::defaults;

/// Behavior rule thresholds. Hard thresholds, no learned components.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Prediction entropy above this indicates unsafe model uncertainty.
    pub entropy_threshold: f64,
    /// Borderline probability range flagged as low confidence (inclusive).
    pub low_confidence_min: f64,
    pub low_confidence_max: f64,
    /// Transaction amount at or above which the high-value rule applies.
    pub high_value_amount: f64,
    /// Confidence below this on a high-value transaction is flagged.
    pub low_confidence_for_value: f64,
    /// Probability above which a prediction counts as high-risk.
    pub high_risk_probability: f64,
    /// Upper bound on the recent high-risk ratio: baseline ratio × factor.
    pub risk_ratio_upper_factor: f64,
    /// Fixed lower bound on the recent high-risk ratio.
    pub risk_ratio_lower_bound: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            entropy_threshold: defaults::DEFAULT_ENTROPY_THRESHOLD,
            low_confidence_min: defaults::DEFAULT_LOW_CONFIDENCE_MIN,
            low_confidence_max: defaults::DEFAULT_LOW_CONFIDENCE_MAX,
            high_value_amount: defaults::DEFAULT_HIGH_VALUE_AMOUNT,
            low_confidence_for_value: defaults::DEFAULT_LOW_CONFIDENCE_FOR_VALUE,
            high_risk_probability: defaults::DEFAULT_HIGH_RISK_PROBABILITY,
            risk_ratio_upper_factor: defaults::DEFAULT_RISK_RATIO_UPPER_FACTOR,
            risk_ratio_lower_bound: defaults::DEFAULT_RISK_RATIO_LOWER_BOUND,
        }
    }
}

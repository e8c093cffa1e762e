//! Behavior findings — rule violations flagged on individual predictions or
//! on aggregate prediction statistics.

use serde::{Deserialize, Serialize};

use crate::models::{PredictionEvent, Severity};

/// Aggregate statistics over a window of prediction probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorStats {
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Share of predictions above the high-risk probability threshold.
    pub high_risk_ratio: f64,
}

impl BehaviorStats {
    /// Compute window statistics. Empty input yields all-zero stats.
    pub fn from_probabilities(probabilities: &[f64], high_risk_threshold: f64) -> Self {
        if probabilities.is_empty() {
            return Self {
                mean: 0.0,
                std: 0.0,
                high_risk_ratio: 0.0,
            };
        }
        let n = probabilities.len() as f64;
        let mean = probabilities.iter().sum::<f64>() / n;
        let variance = probabilities.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
        let high_risk = probabilities
            .iter()
            .filter(|p| **p > high_risk_threshold)
            .count() as f64;
        Self {
            mean,
            std: variance.sqrt(),
            high_risk_ratio: high_risk / n,
        }
    }
}

/// The field values that triggered a finding, kept for auditability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriggerValues {
    /// A single prediction event violated an event-level rule.
    Event { event: PredictionEvent },
    /// Aggregate prediction statistics shifted away from the baseline.
    Shift {
        baseline: BehaviorStats,
        recent: BehaviorStats,
    },
    /// The batch feature set diverged from the reference schema.
    Schema {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },
}

/// One rule violation, paired with the values that triggered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorFinding {
    /// Name of the violated rule.
    pub rule: String,
    pub severity: Severity,
    /// Human-readable description of the violated condition.
    pub description: String,
    pub trigger: TriggerValues,
}

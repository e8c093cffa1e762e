//! A single prediction produced by the deployed model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One prediction event as supplied by the inference collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEvent {
    /// Deployed model identifier (e.g. "fraud_xgb").
    pub model_name: String,
    /// Predicted class label.
    pub predicted_label: String,
    /// Predicted positive-class probability.
    pub probability: f64,
    /// Model confidence score.
    pub confidence: f64,
    /// Prediction entropy (uncertainty of the output distribution).
    pub entropy: f64,
    /// Transaction amount of the scored instance.
    pub amount: f64,
    pub occurred_at: DateTime<Utc>,
}

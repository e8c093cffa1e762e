//! Feature values and per-feature distributional fingerprints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single observed feature value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(String),
}

impl FeatureValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(v) => Some(*v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&str> {
        match self {
            FeatureValue::Categorical(c) => Some(c.as_str()),
            FeatureValue::Numeric(_) => None,
        }
    }
}

/// One observation row: feature name → value.
pub type FeatureVector = HashMap<String, FeatureValue>;

/// Compact distributional fingerprint for one feature.
///
/// Numeric features keep an ordered reference sample sufficient for a
/// two-sample ECDF test; categorical features keep a category → count table.
/// Immutable once computed; recomputed only by an explicit rebaseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeatureSummary {
    Numeric {
        /// Reference sample, sorted ascending.
        sample: Vec<f64>,
    },
    Categorical {
        /// Category → observed count in the reference period.
        counts: HashMap<String, u64>,
    },
}

impl FeatureSummary {
    /// Semantic type name, matching the serialized `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            FeatureSummary::Numeric { .. } => "numeric",
            FeatureSummary::Categorical { .. } => "categorical",
        }
    }

    /// True when the fingerprint carries no usable data.
    pub fn is_empty(&self) -> bool {
        match self {
            FeatureSummary::Numeric { sample } => sample.is_empty(),
            FeatureSummary::Categorical { counts } => {
                counts.is_empty() || counts.values().all(|c| *c == 0)
            }
        }
    }
}

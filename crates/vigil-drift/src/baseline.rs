//! Baseline construction — build a reference snapshot from historical rows.
//!
//! The baseline collaborator computes this once from trusted historical data
//! and hands it to `ReferenceStore::replace`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use vigil_core::errors::SnapshotError;
use vigil_core::models::{FeatureSummary, FeatureValue, FeatureVector, ReferenceSnapshot};

/// Build a snapshot from historical feature vectors.
///
/// Each column's semantic type follows its first observed value; values of
/// the other type in the same column are skipped.
pub fn build_snapshot(
    rows: &[FeatureVector],
    created_at: DateTime<Utc>,
) -> Result<ReferenceSnapshot, SnapshotError> {
    if rows.is_empty() {
        return Err(SnapshotError::InvalidSnapshot {
            reason: "no historical rows to baseline from".to_string(),
        });
    }

    let mut features: HashMap<String, FeatureSummary> = HashMap::new();
    for row in rows {
        for (name, value) in row {
            let summary = features.entry(name.clone()).or_insert_with(|| match value {
                FeatureValue::Numeric(_) => FeatureSummary::Numeric { sample: Vec::new() },
                FeatureValue::Categorical(_) => FeatureSummary::Categorical {
                    counts: HashMap::new(),
                },
            });
            match (summary, value) {
                (FeatureSummary::Numeric { sample }, FeatureValue::Numeric(v)) => {
                    sample.push(*v);
                }
                (FeatureSummary::Categorical { counts }, FeatureValue::Categorical(c)) => {
                    *counts.entry(c.clone()).or_insert(0) += 1;
                }
                _ => {}
            }
        }
    }

    for summary in features.values_mut() {
        if let FeatureSummary::Numeric { sample } = summary {
            sample.sort_by(f64::total_cmp);
        }
    }

    let snapshot = ReferenceSnapshot::new(features, created_at, rows.len() as u64);
    snapshot.validate()?;
    Ok(snapshot)
}

//! Reference snapshot — the immutable baseline used for drift comparison.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::SnapshotError;
use crate::models::FeatureSummary;

/// Immutable baseline: feature name → distributional fingerprint, plus
/// provenance. Exactly one snapshot is active at a time; replacing it is an
/// atomic swap performed by the reference store, never a field-level edit.
///
/// The serialized form is the persisted snapshot format: features keyed by
/// name with a tagged `type` + summary payload, and top-level `created_at` /
/// `row_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    pub features: HashMap<String, FeatureSummary>,
    pub created_at: DateTime<Utc>,
    pub row_count: u64,
}

impl ReferenceSnapshot {
    pub fn new(
        features: HashMap<String, FeatureSummary>,
        created_at: DateTime<Utc>,
        row_count: u64,
    ) -> Self {
        Self {
            features,
            created_at,
            row_count,
        }
    }

    /// Reject snapshots that cannot serve as a baseline: zero rows or an
    /// empty feature mapping.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.row_count == 0 {
            return Err(SnapshotError::InvalidSnapshot {
                reason: "snapshot has zero rows".to_string(),
            });
        }
        if self.features.is_empty() {
            return Err(SnapshotError::InvalidSnapshot {
                reason: "snapshot has an empty feature mapping".to_string(),
            });
        }
        Ok(())
    }

    /// Parse a persisted snapshot.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self =
            serde_json::from_str(json).map_err(|e| SnapshotError::Malformed {
                message: e.to_string(),
            })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serialize for persistence across restarts.
    pub fn to_json_string(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Malformed {
            message: e.to_string(),
        })
    }
}

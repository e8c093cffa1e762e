//! Drift detector — compares a bounded batch of feature vectors against the
//! active reference snapshot, one statistical test per feature.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use vigil_core::config::DriftConfig;
use vigil_core::errors::DriftError;
use vigil_core::models::{
    DriftScore, DriftVerdict, FeatureSummary, FeatureVector, ReferenceSnapshot, Severity,
};

use crate::stats::{chi_square, ks};

/// Stateless detector. `detect` is a pure function of its inputs: identical
/// batch + snapshot always yields an identical verdict.
pub struct DriftDetector {
    config: DriftConfig,
}

impl DriftDetector {
    pub fn new(config: DriftConfig) -> Self {
        Self { config }
    }

    /// Run per-feature distribution tests and aggregate into a verdict.
    ///
    /// The aggregate score is the maximum per-feature distance statistic;
    /// the worst feature drives the verdict severity.
    pub fn detect(
        &self,
        batch: &[FeatureVector],
        snapshot: &ReferenceSnapshot,
    ) -> Result<DriftVerdict, DriftError> {
        if batch.is_empty() {
            return Err(DriftError::EmptyBatch);
        }
        if batch.len() > self.config.max_batch_rows {
            return Err(DriftError::BatchTooLarge {
                rows: batch.len(),
                max: self.config.max_batch_rows,
            });
        }

        let batch_features: BTreeSet<&str> = batch
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        let snapshot_features: BTreeSet<&str> =
            snapshot.features.keys().map(String::as_str).collect();

        let missing: Vec<String> = snapshot_features
            .difference(&batch_features)
            .map(|s| s.to_string())
            .collect();
        let unexpected: Vec<String> = batch_features
            .difference(&snapshot_features)
            .map(|s| s.to_string())
            .collect();
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(DriftError::SchemaMismatch {
                missing,
                unexpected,
            });
        }

        // Deterministic feature order: iterate the snapshot sorted by name.
        let ordered: BTreeMap<&str, &FeatureSummary> = snapshot
            .features
            .iter()
            .map(|(name, summary)| (name.as_str(), summary))
            .collect();

        let mut scores = Vec::with_capacity(ordered.len());
        let mut drifted_features = Vec::new();
        let mut overall_score: f64 = 0.0;

        for (name, summary) in ordered {
            let score = self.score_feature(name, summary, batch);
            if score.statistic > overall_score {
                overall_score = score.statistic;
            }
            if score.drifted {
                drifted_features.push(name.to_string());
            }
            scores.push(score);
        }

        Ok(DriftVerdict {
            overall_score,
            drifted_features,
            severity: Severity::from_drift_score(
                overall_score,
                &self.config.severity_breakpoints,
            ),
            scores,
        })
    }

    fn score_feature(
        &self,
        name: &str,
        summary: &FeatureSummary,
        batch: &[FeatureVector],
    ) -> DriftScore {
        // A malformed summary is fatal to this feature only: it scores as
        // drifted at full distance and the verdict carries on.
        if summary.is_empty() {
            tracing::warn!(feature = name, "malformed feature summary, scoring as drifted");
            return drifted_by_definition(name);
        }

        match summary {
            FeatureSummary::Numeric { sample } => {
                let values: Vec<f64> = batch
                    .iter()
                    .filter_map(|row| row.get(name).and_then(|v| v.as_numeric()))
                    .collect();
                if values.is_empty() {
                    tracing::warn!(
                        feature = name,
                        "no numeric values in batch for numeric feature"
                    );
                    return drifted_by_definition(name);
                }
                let result = ks::two_sample(sample, &values);
                DriftScore {
                    feature: name.to_string(),
                    statistic: result.statistic,
                    p_value: result.p_value,
                    drifted: result.p_value < self.config.p_value_threshold
                        || result.statistic > self.config.numeric_statistic_threshold,
                }
            }
            FeatureSummary::Categorical { counts } => {
                let mut observed: HashMap<String, u64> = HashMap::new();
                for row in batch {
                    if let Some(category) = row.get(name).and_then(|v| v.as_categorical()) {
                        *observed.entry(category.to_string()).or_insert(0) += 1;
                    }
                }
                if observed.is_empty() {
                    tracing::warn!(
                        feature = name,
                        "no categorical values in batch for categorical feature"
                    );
                    return drifted_by_definition(name);
                }
                let result = chi_square::goodness_of_fit(counts, &observed);
                DriftScore {
                    feature: name.to_string(),
                    statistic: result.distance,
                    p_value: result.p_value,
                    drifted: result.p_value < self.config.p_value_threshold
                        || result.distance > self.config.categorical_statistic_threshold,
                }
            }
        }
    }
}

fn drifted_by_definition(name: &str) -> DriftScore {
    DriftScore {
        feature: name.to_string(),
        statistic: 1.0,
        p_value: 0.0,
        drifted: true,
    }
}

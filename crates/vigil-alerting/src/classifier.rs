//! Alert classifier — normalizes raw findings into alert candidates.
//!
//! A drift verdict collapses into one candidate per detection run (never one
//! per feature, to avoid alert storms); behavior findings map 1:1; a schema
//! mismatch becomes a silent-failure candidate because a model fed a schema
//! it wasn't baselined on is a safety-relevant condition.

use vigil_core::models::{
    AlertDetails, AlertType, BehaviorFinding, DriftVerdict, Severity, TriggerValues,
};

/// A classified alert awaiting deduplication. `key` is the primary signal
/// used for suppression: the sorted drifted-feature set for drift, the rule
/// name otherwise.
#[derive(Debug, Clone)]
pub struct AlertCandidate {
    pub alert_type: AlertType,
    pub key: String,
    pub severity: Severity,
    pub message: String,
    pub details: AlertDetails,
}

/// Stateless mapping from findings to candidates.
#[derive(Debug, Default)]
pub struct AlertClassifier;

impl AlertClassifier {
    pub fn new() -> Self {
        Self
    }

    /// One candidate summarizing all drifted features, or None when the
    /// verdict carries no drift.
    pub fn from_drift_verdict(&self, verdict: &DriftVerdict) -> Option<AlertCandidate> {
        if !verdict.has_drift() {
            return None;
        }
        let key = verdict.drifted_features.join(",");
        let message = format!(
            "distribution drift on {} feature(s) [{}], max statistic {:.3}",
            verdict.drifted_features.len(),
            key,
            verdict.overall_score,
        );
        Some(AlertCandidate {
            alert_type: AlertType::Drift,
            key,
            severity: verdict.severity,
            message,
            details: AlertDetails::Drift(verdict.clone()),
        })
    }

    /// Event-scoped findings map 1:1.
    pub fn from_behavior_finding(&self, finding: &BehaviorFinding) -> AlertCandidate {
        AlertCandidate {
            alert_type: AlertType::Behavior,
            key: finding.rule.clone(),
            severity: finding.severity,
            message: format!("{}: {}", finding.rule, finding.description),
            details: AlertDetails::Behavior(finding.clone()),
        }
    }

    /// Silent-failure findings (aggregate shifts) map 1:1 under their own
    /// alert type.
    pub fn from_silent_failure(&self, finding: &BehaviorFinding) -> AlertCandidate {
        AlertCandidate {
            alert_type: AlertType::SilentFailure,
            key: finding.rule.clone(),
            severity: finding.severity,
            message: format!("{}: {}", finding.rule, finding.description),
            details: AlertDetails::Behavior(finding.clone()),
        }
    }

    /// Schema mismatch reported by the detector, surfaced as a high-severity
    /// silent-failure alert rather than a swallowed error.
    pub fn from_schema_mismatch(
        &self,
        missing: Vec<String>,
        unexpected: Vec<String>,
    ) -> AlertCandidate {
        let finding = BehaviorFinding {
            rule: "schema_mismatch".to_string(),
            severity: Severity::High,
            description: format!(
                "batch schema diverged from the reference: missing {missing:?}, unexpected {unexpected:?}"
            ),
            trigger: TriggerValues::Schema {
                missing,
                unexpected,
            },
        };
        self.from_silent_failure(&finding)
    }
}

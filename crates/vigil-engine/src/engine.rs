//! MonitorEngine — the engine's inbound surface.

use std::sync::Arc;

use chrono::Utc;

use vigil_alerting::{AlertCandidate, AlertClassifier, Deduplicator, Outcome};
use vigil_behavior::{detect_silent_shift, RuleEvaluator, RuleSet};
use vigil_core::config::VigilConfig;
use vigil_core::errors::{DriftError, VigilResult};
use vigil_core::models::{
    AlertQuery, AlertRecord, BehaviorStats, FeatureVector, PredictionEvent, ReferenceSnapshot,
};
use vigil_core::traits::IAlertStore;
use vigil_drift::{DriftDetector, ReferenceStore};

use crate::report::CheckReport;

/// Orchestrates one check at a time; invoked per request or on a schedule,
/// no background loop. The only long-lived mutable state is the reference
/// store's active snapshot and the deduplicator's recent-alert memory.
pub struct MonitorEngine {
    reference: ReferenceStore,
    detector: DriftDetector,
    evaluator: RuleEvaluator,
    classifier: AlertClassifier,
    dedup: Deduplicator,
    store: Arc<dyn IAlertStore>,
    config: VigilConfig,
}

impl MonitorEngine {
    pub fn new(
        config: VigilConfig,
        initial_snapshot: ReferenceSnapshot,
        store: Arc<dyn IAlertStore>,
    ) -> VigilResult<Self> {
        let reference = ReferenceStore::new(initial_snapshot)?;
        let detector = DriftDetector::new(config.drift.clone());
        let evaluator = RuleEvaluator::new(RuleSet::from_config(&config.behavior));
        let dedup = Deduplicator::new(config.alerting.clone());
        Ok(Self {
            reference,
            detector,
            evaluator,
            classifier: AlertClassifier::new(),
            dedup,
            store,
            config,
        })
    }

    /// Engine with a caller-supplied rule set (the default registry plus any
    /// domain rules).
    pub fn with_rules(
        config: VigilConfig,
        initial_snapshot: ReferenceSnapshot,
        store: Arc<dyn IAlertStore>,
        rules: RuleSet,
    ) -> VigilResult<Self> {
        let mut engine = Self::new(config, initial_snapshot, store)?;
        engine.evaluator = RuleEvaluator::new(rules);
        Ok(engine)
    }

    /// Run a drift check on a batch of recent observations.
    ///
    /// The snapshot handle is taken once and used throughout, so a
    /// concurrent rebaseline never tears the comparison. A schema mismatch
    /// is persisted as a silent-failure alert instead of failing the check;
    /// an empty batch and a storage failure propagate to the caller.
    pub fn detect_batch(&self, batch: &[FeatureVector]) -> VigilResult<CheckReport> {
        self.dedup.evict_expired(Utc::now());
        let snapshot = self.reference.active();
        let mut report = CheckReport::default();

        match self.detector.detect(batch, &snapshot) {
            Ok(verdict) => {
                tracing::debug!(
                    overall_score = verdict.overall_score,
                    drifted = verdict.drifted_features.len(),
                    "drift check complete"
                );
                if let Some(candidate) = self.classifier.from_drift_verdict(&verdict) {
                    self.dispatch(candidate, &mut report)?;
                }
                report.verdict = Some(verdict);
            }
            Err(DriftError::SchemaMismatch {
                missing,
                unexpected,
            }) => {
                let candidate = self.classifier.from_schema_mismatch(missing, unexpected);
                self.dispatch(candidate, &mut report)?;
            }
            Err(other) => return Err(other.into()),
        }
        Ok(report)
    }

    /// Evaluate a single prediction event against the behavior rules.
    pub fn evaluate_event(&self, event: &PredictionEvent) -> VigilResult<CheckReport> {
        self.dedup.evict_expired(Utc::now());
        let mut report = CheckReport::default();
        for finding in self.evaluator.evaluate(event) {
            let candidate = self.classifier.from_behavior_finding(&finding);
            self.dispatch(candidate, &mut report)?;
        }
        Ok(report)
    }

    /// Compare recent aggregate prediction statistics to the behavioral
    /// baseline and alert on a silent shift.
    pub fn check_silent_shift(
        &self,
        baseline: &BehaviorStats,
        recent: &BehaviorStats,
    ) -> VigilResult<CheckReport> {
        let mut report = CheckReport::default();
        if let Some(finding) = detect_silent_shift(baseline, recent, &self.config.behavior) {
            let candidate = self.classifier.from_silent_failure(&finding);
            self.dispatch(candidate, &mut report)?;
        }
        Ok(report)
    }

    /// Atomic rebaseline.
    pub fn replace_snapshot(&self, snapshot: ReferenceSnapshot) -> VigilResult<()> {
        self.reference.replace(snapshot)?;
        Ok(())
    }

    pub fn active_snapshot(&self) -> Arc<ReferenceSnapshot> {
        self.reference.active()
    }

    /// Read-side pass-through for the dashboard/API collaborator.
    pub fn recent_alerts(&self, query: &AlertQuery) -> VigilResult<Vec<AlertRecord>> {
        Ok(self.store.query(query)?)
    }

    fn dispatch(&self, candidate: AlertCandidate, report: &mut CheckReport) -> VigilResult<()> {
        match self.dedup.admit(candidate, Utc::now()) {
            Outcome::Emitted(record) => {
                // A failed append propagates; the caller decides on retry.
                self.store.append(&record)?;
                report.emitted.push(record);
            }
            Outcome::Suppressed { key, .. } => {
                report.suppressed.push(key);
            }
        }
        Ok(())
    }
}

//! Data models shared across the workspace.

pub mod alert_record;
pub mod behavior_finding;
pub mod drift_verdict;
pub mod feature;
pub mod prediction_event;
pub mod reference_snapshot;
pub mod severity;

pub use alert_record::{AlertDetails, AlertQuery, AlertRecord, AlertType};
pub use behavior_finding::{BehaviorFinding, BehaviorStats, TriggerValues};
pub use drift_verdict::{DriftScore, DriftVerdict};
pub use feature::{FeatureSummary, FeatureValue, FeatureVector};
pub use prediction_event::PredictionEvent;
pub use reference_snapshot::ReferenceSnapshot;
pub use severity::Severity;

//! Outcome of one engine check.

use vigil_alerting::DedupKey;
use vigil_core::models::{AlertRecord, DriftVerdict};

/// What one call to the engine produced: the verdict (for drift checks),
/// the records actually persisted, and the suppressions that occurred.
/// Suppressions are reported, never silently dropped.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub verdict: Option<DriftVerdict>,
    pub emitted: Vec<AlertRecord>,
    pub suppressed: Vec<DedupKey>,
}

impl CheckReport {
    pub fn alert_count(&self) -> usize {
        self.emitted.len()
    }
}

//! Alert records — the unit of persistence, immutable once stored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{BehaviorFinding, DriftVerdict, Severity};

/// Kind of condition an alert reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Drift,
    Behavior,
    SilentFailure,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::Drift => "drift",
            AlertType::Behavior => "behavior",
            AlertType::SilentFailure => "silent_failure",
        }
    }
}

impl std::str::FromStr for AlertType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drift" => Ok(AlertType::Drift),
            "behavior" => Ok(AlertType::Behavior),
            "silent_failure" => Ok(AlertType::SilentFailure),
            other => Err(format!("unknown alert type: {other}")),
        }
    }
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured payload of an alert. Always round-trips to the originating
/// DriftVerdict or BehaviorFinding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AlertDetails {
    Drift(DriftVerdict),
    Behavior(BehaviorFinding),
}

/// One persisted alert. Immutable once stored; corrections are new records,
/// never edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub alert_type: AlertType,
    pub severity: Severity,
    pub message: String,
    pub details: AlertDetails,
}

/// Filters for alert store queries. All fields optional; results are always
/// ordered by timestamp descending.
#[derive(Debug, Clone, Default)]
pub struct AlertQuery {
    pub alert_type: Option<AlertType>,
    pub severity: Option<Severity>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

//! Severity — four-level ordinal classification attached to every alert.

use serde::{Deserialize, Serialize};

use crate::config::SeverityBreakpoints;

/// Ordered alert severity. Derives `Ord` so `Low < Medium < High < Critical`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Bucket an aggregate drift score into a severity using the configured
    /// breakpoints: `< low` → Low, `< medium` → Medium, `< high` → High,
    /// otherwise Critical.
    pub fn from_drift_score(score: f64, breakpoints: &SeverityBreakpoints) -> Self {
        if score < breakpoints.low {
            Severity::Low
        } else if score < breakpoints.medium {
            Severity::Medium
        } else if score < breakpoints.high {
            Severity::High
        } else {
            Severity::Critical
        }
    }

    /// One level up, saturating at Critical.
    pub fn escalate(self) -> Self {
        match self {
            Severity::Low => Severity::Medium,
            Severity::Medium => Severity::High,
            Severity::High | Severity::Critical => Severity::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Severity breakpoints applied to the aggregate drift score:
/// `< low` → Low, `< medium` → Medium, `< high` → High, otherwise Critical.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityBreakpoints {
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for SeverityBreakpoints {
    fn default() -> Self {
        Self {
            low: defaults::DEFAULT_BREAKPOINT_LOW,
            medium: defaults::DEFAULT_BREAKPOINT_MEDIUM,
            high: defaults::DEFAULT_BREAKPOINT_HIGH,
        }
    }
}

/// Drift detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Significance threshold: a feature drifts when its p-value falls below
    /// this.
    pub p_value_threshold: f64,
    /// Magnitude threshold on the KS statistic for numeric features.
    pub numeric_statistic_threshold: f64,
    /// Magnitude threshold on the normalized distance for categorical
    /// features.
    pub categorical_statistic_threshold: f64,
    /// Upper bound on batch rows per check; larger batches are rejected
    /// with `DriftError::BatchTooLarge` so one caller cannot stall the
    /// request path.
    pub max_batch_rows: usize,
    pub severity_breakpoints: SeverityBreakpoints,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            p_value_threshold: defaults::DEFAULT_P_VALUE_THRESHOLD,
            numeric_statistic_threshold: defaults::DEFAULT_NUMERIC_STATISTIC_THRESHOLD,
            categorical_statistic_threshold: defaults::DEFAULT_CATEGORICAL_STATISTIC_THRESHOLD,
            max_batch_rows: defaults::DEFAULT_MAX_BATCH_ROWS,
            severity_breakpoints: SeverityBreakpoints::default(),
        }
    }
}

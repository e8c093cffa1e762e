//! Engine configuration, one struct per subsystem. Every tunable of the
//! detector, rule set, and deduplicator is explicit configuration with a
//! documented default, never a hard-coded constant.

pub mod alerting_config;
pub mod behavior_config;
pub mod defaults;
pub mod drift_config;

pub use alerting_config::AlertingConfig;
pub use behavior_config::BehaviorConfig;
pub use drift_config::{DriftConfig, SeverityBreakpoints};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VigilConfig {
    pub drift: DriftConfig,
    pub behavior: BehaviorConfig,
    pub alerting: AlertingConfig,
}

impl VigilConfig {
    /// Parse a TOML config document. Missing sections and fields fall back
    /// to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.drift.p_value_threshold) {
            return Err(ConfigError::InvalidValue {
                field: "drift.p_value_threshold".to_string(),
                reason: "must be within [0, 1]".to_string(),
            });
        }
        if self.drift.max_batch_rows == 0 {
            return Err(ConfigError::InvalidValue {
                field: "drift.max_batch_rows".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let bp = &self.drift.severity_breakpoints;
        if !(bp.low < bp.medium && bp.medium < bp.high) {
            return Err(ConfigError::InvalidValue {
                field: "drift.severity_breakpoints".to_string(),
                reason: "breakpoints must be strictly increasing".to_string(),
            });
        }
        if self.alerting.escalation_cycles == 0 {
            return Err(ConfigError::InvalidValue {
                field: "alerting.escalation_cycles".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Alert classification and deduplication configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertingConfig {
    /// Cooldown window during which identical findings are suppressed.
    pub cooldown_minutes: u64,
    /// Number of consecutive cycles after which a persisting condition is
    /// escalated one severity level.
    pub escalation_cycles: u32,
    /// Dedup entries older than cooldown × this factor are evicted.
    pub dedup_retention_factor: u32,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            cooldown_minutes: defaults::DEFAULT_COOLDOWN_MINUTES,
            escalation_cycles: defaults::DEFAULT_ESCALATION_CYCLES,
            dedup_retention_factor: defaults::DEFAULT_DEDUP_RETENTION_FACTOR,
        }
    }
}

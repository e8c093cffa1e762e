//! Cooldown deduplication and severity escalation.
//!
//! Recent-alert memory is a bounded key → state map with periodic eviction.
//! Updates are atomic per key via the map's entry API, so two concurrent
//! identical findings cannot both be classified as "new".

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use uuid::Uuid;

use vigil_core::config::AlertingConfig;
use vigil_core::models::{AlertRecord, AlertType, Severity};

use crate::classifier::AlertCandidate;
use crate::events;

/// Primary-signal identity of a candidate: alert type plus the drifted
/// feature set or rule name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DedupKey {
    pub alert_type: AlertType,
    pub signal: String,
}

#[derive(Debug, Clone)]
struct DedupState {
    last_alerted: DateTime<Utc>,
    base_severity: Severity,
    /// Findings observed for this key in the current window, the emitted
    /// one included.
    consecutive_hits: u32,
}

/// Outcome of admitting one candidate. Suppression is returned, not silently
/// dropped, so it stays observable for testing and debugging.
#[derive(Debug, Clone)]
pub enum Outcome {
    Emitted(AlertRecord),
    Suppressed {
        key: DedupKey,
        retry_after: DateTime<Utc>,
    },
}

/// Shared recent-alert memory consulted by concurrent classify calls.
pub struct Deduplicator {
    config: AlertingConfig,
    recent: DashMap<DedupKey, DedupState>,
}

impl Deduplicator {
    pub fn new(config: AlertingConfig) -> Self {
        Self {
            config,
            recent: DashMap::new(),
        }
    }

    /// Admit a candidate at time `now`.
    ///
    /// A repeat of the same key within the cooldown window is suppressed,
    /// except when the condition has persisted for the configured number of
    /// consecutive cycles: then an escalated record (one severity level
    /// above the window's base) is emitted and the window restarts at the
    /// escalated severity.
    pub fn admit(&self, candidate: AlertCandidate, now: DateTime<Utc>) -> Outcome {
        let key = DedupKey {
            alert_type: candidate.alert_type,
            signal: candidate.key.clone(),
        };
        let cooldown = Duration::minutes(self.config.cooldown_minutes as i64);

        let mut entry = self.recent.entry(key.clone()).or_insert(DedupState {
            last_alerted: now,
            base_severity: candidate.severity,
            consecutive_hits: 0,
        });
        let state = entry.value_mut();

        if state.consecutive_hits == 0 {
            // Fresh key, inserted just above.
            state.consecutive_hits = 1;
            let record = build_record(&candidate, candidate.severity, now);
            events::alert_emitted(&record);
            return Outcome::Emitted(record);
        }

        if now - state.last_alerted >= cooldown {
            // Cooldown expired: treat as a new occurrence.
            state.last_alerted = now;
            state.base_severity = candidate.severity;
            state.consecutive_hits = 1;
            let record = build_record(&candidate, candidate.severity, now);
            events::alert_emitted(&record);
            return Outcome::Emitted(record);
        }

        state.consecutive_hits += 1;
        if state.consecutive_hits >= self.config.escalation_cycles {
            // Sustained drift is worse than transient drift.
            let escalated = state.base_severity.escalate();
            events::alert_escalated(&key, state.consecutive_hits);
            state.last_alerted = now;
            state.base_severity = escalated;
            state.consecutive_hits = 1;
            let record = build_record(&candidate, escalated, now);
            events::alert_emitted(&record);
            return Outcome::Emitted(record);
        }

        let retry_after = state.last_alerted + cooldown;
        events::alert_suppressed(&key, retry_after);
        Outcome::Suppressed { key, retry_after }
    }

    /// Drop entries whose last alert is older than cooldown × retention
    /// factor, keeping memory bounded under sustained load.
    pub fn evict_expired(&self, now: DateTime<Utc>) {
        let horizon = Duration::minutes(
            (self.config.cooldown_minutes * self.config.dedup_retention_factor as u64) as i64,
        );
        self.recent
            .retain(|_, state| now - state.last_alerted < horizon);
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.recent.len()
    }
}

fn build_record(candidate: &AlertCandidate, severity: Severity, now: DateTime<Utc>) -> AlertRecord {
    AlertRecord {
        id: Uuid::new_v4().to_string(),
        timestamp: now,
        alert_type: candidate.alert_type,
        severity,
        message: candidate.message.clone(),
        details: candidate.details.clone(),
    }
}

//! Structured tracing events for the alerting pipeline.

use chrono::{DateTime, Utc};

use vigil_core::models::AlertRecord;

use crate::dedup::DedupKey;

pub fn alert_emitted(record: &AlertRecord) {
    tracing::info!(
        id = %record.id,
        alert_type = %record.alert_type,
        severity = %record.severity,
        message = %record.message,
        "alert emitted"
    );
}

pub fn alert_suppressed(key: &DedupKey, retry_after: DateTime<Utc>) {
    tracing::info!(
        alert_type = %key.alert_type,
        signal = %key.signal,
        retry_after = %retry_after,
        "alert suppressed within cooldown"
    );
}

pub fn alert_escalated(key: &DedupKey, hits: u32) {
    tracing::warn!(
        alert_type = %key.alert_type,
        signal = %key.signal,
        consecutive_hits = hits,
        "sustained condition escalated"
    );
}

use std::collections::HashMap;

use chrono::Utc;
use vigil_core::config::{SeverityBreakpoints, VigilConfig};
use vigil_core::models::{
    AlertDetails, BehaviorFinding, BehaviorStats, DriftScore, DriftVerdict, FeatureSummary,
    PredictionEvent, ReferenceSnapshot, Severity, TriggerValues,
};

// ── Severity ─────────────────────────────────────────────────────────────

#[test]
fn severity_bucketing_follows_breakpoints() {
    let bp = SeverityBreakpoints::default();
    assert_eq!(Severity::from_drift_score(0.0, &bp), Severity::Low);
    assert_eq!(Severity::from_drift_score(0.09, &bp), Severity::Low);
    assert_eq!(Severity::from_drift_score(0.1, &bp), Severity::Medium);
    assert_eq!(Severity::from_drift_score(0.29, &bp), Severity::Medium);
    assert_eq!(Severity::from_drift_score(0.3, &bp), Severity::High);
    assert_eq!(Severity::from_drift_score(0.6, &bp), Severity::Critical);
    assert_eq!(Severity::from_drift_score(1.0, &bp), Severity::Critical);
}

#[test]
fn severity_escalation_saturates_at_critical() {
    assert_eq!(Severity::Low.escalate(), Severity::Medium);
    assert_eq!(Severity::Medium.escalate(), Severity::High);
    assert_eq!(Severity::High.escalate(), Severity::Critical);
    assert_eq!(Severity::Critical.escalate(), Severity::Critical);
}

#[test]
fn severity_is_ordered() {
    assert!(Severity::Low < Severity::Medium);
    assert!(Severity::Medium < Severity::High);
    assert!(Severity::High < Severity::Critical);
}

// ── Alert details round-trip ─────────────────────────────────────────────

fn sample_event() -> PredictionEvent {
    PredictionEvent {
        model_name: "fraud_xgb".to_string(),
        predicted_label: "fraud".to_string(),
        probability: 0.55,
        confidence: 0.55,
        entropy: 0.62,
        amount: 1200.0,
        occurred_at: Utc::now(),
    }
}

#[test]
fn drift_details_round_trip() {
    let verdict = DriftVerdict {
        overall_score: 0.42,
        drifted_features: vec!["amount".to_string()],
        severity: Severity::High,
        scores: vec![DriftScore {
            feature: "amount".to_string(),
            statistic: 0.42,
            p_value: 0.001,
            drifted: true,
        }],
    };
    let details = AlertDetails::Drift(verdict);
    let json = serde_json::to_string(&details).unwrap();
    let back: AlertDetails = serde_json::from_str(&json).unwrap();
    assert_eq!(back, details);
}

#[test]
fn behavior_details_round_trip() {
    let finding = BehaviorFinding {
        rule: "high_prediction_entropy".to_string(),
        severity: Severity::Medium,
        description: "Model uncertainty exceeds safe threshold".to_string(),
        trigger: TriggerValues::Event {
            event: sample_event(),
        },
    };
    let details = AlertDetails::Behavior(finding);
    let json = serde_json::to_string(&details).unwrap();
    let back: AlertDetails = serde_json::from_str(&json).unwrap();
    assert_eq!(back, details);
}

// ── Behavior stats ───────────────────────────────────────────────────────

#[test]
fn behavior_stats_from_probabilities() {
    let stats = BehaviorStats::from_probabilities(&[0.9, 0.9, 0.1, 0.1], 0.8);
    assert!((stats.mean - 0.5).abs() < 1e-12);
    assert!((stats.std - 0.4).abs() < 1e-12);
    assert!((stats.high_risk_ratio - 0.5).abs() < 1e-12);
}

#[test]
fn behavior_stats_empty_input() {
    let stats = BehaviorStats::from_probabilities(&[], 0.8);
    assert_eq!(stats.mean, 0.0);
    assert_eq!(stats.std, 0.0);
    assert_eq!(stats.high_risk_ratio, 0.0);
}

// ── Snapshot validation & persistence format ─────────────────────────────

#[test]
fn snapshot_rejects_zero_rows_and_empty_features() {
    let mut features = HashMap::new();
    features.insert(
        "amount".to_string(),
        FeatureSummary::Numeric {
            sample: vec![1.0, 2.0],
        },
    );

    let zero_rows = ReferenceSnapshot::new(features.clone(), Utc::now(), 0);
    assert!(zero_rows.validate().is_err());

    let no_features = ReferenceSnapshot::new(HashMap::new(), Utc::now(), 10);
    assert!(no_features.validate().is_err());

    let ok = ReferenceSnapshot::new(features, Utc::now(), 10);
    assert!(ok.validate().is_ok());
}

#[test]
fn snapshot_json_round_trip_keeps_type_tags() {
    let mut features = HashMap::new();
    features.insert(
        "amount".to_string(),
        FeatureSummary::Numeric {
            sample: vec![1.0, 2.0, 3.0],
        },
    );
    let mut counts = HashMap::new();
    counts.insert("card".to_string(), 90u64);
    counts.insert("wire".to_string(), 10u64);
    features.insert("channel".to_string(), FeatureSummary::Categorical { counts });

    let snapshot = ReferenceSnapshot::new(features, Utc::now(), 100);
    let json = snapshot.to_json_string().unwrap();
    assert!(json.contains("\"type\":\"numeric\""));
    assert!(json.contains("\"type\":\"categorical\""));
    assert!(json.contains("row_count"));

    let back = ReferenceSnapshot::from_json_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

// ── Config ───────────────────────────────────────────────────────────────

#[test]
fn config_defaults_match_documented_values() {
    let config = VigilConfig::default();
    assert_eq!(config.drift.p_value_threshold, 0.05);
    assert_eq!(config.drift.severity_breakpoints.low, 0.1);
    assert_eq!(config.drift.severity_breakpoints.medium, 0.3);
    assert_eq!(config.drift.severity_breakpoints.high, 0.6);
    assert_eq!(config.behavior.entropy_threshold, 0.45);
    assert_eq!(config.alerting.cooldown_minutes, 10);
    assert_eq!(config.alerting.escalation_cycles, 3);
}

#[test]
fn config_toml_overrides_and_defaults() {
    let raw = r#"
        [drift]
        p_value_threshold = 0.01

        [alerting]
        cooldown_minutes = 5
    "#;
    let config = VigilConfig::from_toml_str(raw).unwrap();
    assert_eq!(config.drift.p_value_threshold, 0.01);
    assert_eq!(config.alerting.cooldown_minutes, 5);
    // Untouched sections fall back to defaults.
    assert_eq!(config.behavior.entropy_threshold, 0.45);
    assert_eq!(config.alerting.escalation_cycles, 3);
}

#[test]
fn config_rejects_invalid_values() {
    assert!(VigilConfig::from_toml_str("[alerting]\nescalation_cycles = 0").is_err());
    assert!(VigilConfig::from_toml_str("[drift]\np_value_threshold = 1.5").is_err());
    assert!(VigilConfig::from_toml_str("[drift]\nmax_batch_rows = 0").is_err());
    assert!(VigilConfig::from_toml_str("not toml at all [").is_err());
}

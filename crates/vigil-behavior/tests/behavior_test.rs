use chrono::Utc;
use vigil_behavior::{detect_silent_shift, Rule, RuleEvaluator, RuleSet};
use vigil_core::config::BehaviorConfig;
use vigil_core::models::{BehaviorStats, PredictionEvent, Severity, TriggerValues};

fn event(probability: f64, confidence: f64, entropy: f64, amount: f64) -> PredictionEvent {
    PredictionEvent {
        model_name: "fraud_xgb".to_string(),
        predicted_label: "fraud".to_string(),
        probability,
        confidence,
        entropy,
        amount,
        occurred_at: Utc::now(),
    }
}

fn default_evaluator() -> RuleEvaluator {
    RuleEvaluator::new(RuleSet::from_config(&BehaviorConfig::default()))
}

// ── Default registry ─────────────────────────────────────────────────────

#[test]
fn clean_event_yields_no_findings() {
    let evaluator = default_evaluator();
    let findings = evaluator.evaluate(&event(0.95, 0.95, 0.1, 120.0));
    assert!(findings.is_empty());
}

#[test]
fn high_entropy_fires_one_finding() {
    let evaluator = default_evaluator();
    let findings = evaluator.evaluate(&event(0.95, 0.95, 0.8, 120.0));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "high_prediction_entropy");
    assert_eq!(findings[0].severity, Severity::Medium);
    assert!(matches!(findings[0].trigger, TriggerValues::Event { .. }));
}

#[test]
fn one_event_can_violate_every_rule() {
    let evaluator = default_evaluator();
    // Borderline probability, high entropy, high value with low confidence.
    let findings = evaluator.evaluate(&event(0.5, 0.5, 0.9, 20_000.0));
    let names: Vec<&str> = findings.iter().map(|f| f.rule.as_str()).collect();
    // Fixed registration order.
    assert_eq!(
        names,
        vec![
            "high_prediction_entropy",
            "low_model_confidence",
            "high_value_low_confidence",
        ]
    );
    assert_eq!(findings[2].severity, Severity::High);
}

#[test]
fn borderline_range_is_inclusive() {
    let evaluator = default_evaluator();
    assert_eq!(evaluator.evaluate(&event(0.4, 0.9, 0.1, 10.0)).len(), 1);
    assert_eq!(evaluator.evaluate(&event(0.6, 0.9, 0.1, 10.0)).len(), 1);
    assert!(evaluator.evaluate(&event(0.39, 0.9, 0.1, 10.0)).is_empty());
    assert!(evaluator.evaluate(&event(0.61, 0.9, 0.1, 10.0)).is_empty());
}

// ── Open/closed registry ─────────────────────────────────────────────────

#[test]
fn custom_rule_extends_the_registry_without_evaluator_changes() {
    let rules = RuleSet::from_config(&BehaviorConfig::default()).with_rule(Rule::new(
        "zero_amount",
        Severity::Low,
        "Transaction amount of zero",
        |e| e.amount == 0.0,
    ));
    assert_eq!(rules.len(), 4);

    let evaluator = RuleEvaluator::new(rules);
    let findings = evaluator.evaluate(&event(0.95, 0.95, 0.1, 0.0));
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].rule, "zero_amount");
}

// ── Silent-shift detection ───────────────────────────────────────────────

fn stats(mean: f64, std: f64, high_risk_ratio: f64) -> BehaviorStats {
    BehaviorStats {
        mean,
        std,
        high_risk_ratio,
    }
}

#[test]
fn mean_shift_beyond_one_std_is_flagged() {
    let config = BehaviorConfig::default();
    let finding =
        detect_silent_shift(&stats(0.5, 0.05, 0.35), &stats(0.7, 0.05, 0.35), &config).unwrap();
    assert_eq!(finding.rule, "mean_shift");
    assert_eq!(finding.severity, Severity::High);
    assert!(matches!(finding.trigger, TriggerValues::Shift { .. }));
}

#[test]
fn risk_ratio_outside_band_is_flagged() {
    let config = BehaviorConfig::default();
    // Above baseline × 1.5.
    let high =
        detect_silent_shift(&stats(0.5, 0.1, 0.4), &stats(0.5, 0.1, 0.7), &config).unwrap();
    assert_eq!(high.rule, "risk_ratio_shift");
    // Below the fixed 0.30 lower bound.
    let low =
        detect_silent_shift(&stats(0.5, 0.1, 0.4), &stats(0.5, 0.1, 0.1), &config).unwrap();
    assert_eq!(low.rule, "risk_ratio_shift");
}

#[test]
fn stable_behavior_yields_no_shift() {
    let config = BehaviorConfig::default();
    let result = detect_silent_shift(&stats(0.5, 0.1, 0.4), &stats(0.55, 0.1, 0.45), &config);
    assert!(result.is_none());
}

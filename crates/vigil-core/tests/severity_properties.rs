use proptest::prelude::*;

use vigil_core::config::SeverityBreakpoints;
use vigil_core::models::Severity;

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Low),
        Just(Severity::Medium),
        Just(Severity::High),
        Just(Severity::Critical),
    ]
}

proptest! {
    // ── Bucketing is total and monotone in the score ─────────────────────

    #[test]
    fn bucketing_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let bp = SeverityBreakpoints::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            Severity::from_drift_score(lo, &bp) <= Severity::from_drift_score(hi, &bp)
        );
    }

    // ── Escalation never lowers severity and saturates ───────────────────

    #[test]
    fn escalation_never_lowers(severity in arb_severity()) {
        prop_assert!(severity.escalate() >= severity);
        prop_assert_eq!(
            severity.escalate().escalate().escalate().escalate(),
            Severity::Critical
        );
    }

    // ── String round-trip ────────────────────────────────────────────────

    #[test]
    fn severity_string_round_trip(severity in arb_severity()) {
        let parsed: Severity = severity.as_str().parse().unwrap();
        prop_assert_eq!(parsed, severity);
    }
}

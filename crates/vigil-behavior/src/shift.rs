//! Silent-shift detection — compares recent prediction statistics to a
//! behavioral baseline. Catches a model that keeps answering while its
//! output distribution has moved, with no error ever raised.

use vigil_core::config::BehaviorConfig;
use vigil_core::models::{BehaviorFinding, BehaviorStats, Severity, TriggerValues};

/// Compare recent stats to the baseline. At most one shift is reported per
/// check; the mean check takes precedence.
///
/// - Mean shift: recent mean moved more than one baseline standard
///   deviation.
/// - Risk-ratio shift: recent high-risk ratio outside
///   [fixed lower bound, baseline ratio × configured factor].
pub fn detect_silent_shift(
    baseline: &BehaviorStats,
    recent: &BehaviorStats,
    config: &BehaviorConfig,
) -> Option<BehaviorFinding> {
    if (recent.mean - baseline.mean).abs() > baseline.std {
        return Some(shift_finding(
            "mean_shift",
            "Mean prediction probability shifted beyond one baseline standard deviation",
            baseline,
            recent,
        ));
    }

    let upper = baseline.high_risk_ratio * config.risk_ratio_upper_factor;
    let lower = config.risk_ratio_lower_bound;
    if recent.high_risk_ratio > upper || recent.high_risk_ratio < lower {
        return Some(shift_finding(
            "risk_ratio_shift",
            "High-risk prediction ratio moved outside its baseline band",
            baseline,
            recent,
        ));
    }

    None
}

fn shift_finding(
    rule: &str,
    description: &str,
    baseline: &BehaviorStats,
    recent: &BehaviorStats,
) -> BehaviorFinding {
    BehaviorFinding {
        rule: rule.to_string(),
        severity: Severity::High,
        description: description.to_string(),
        trigger: TriggerValues::Shift {
            baseline: baseline.clone(),
            recent: recent.clone(),
        },
    }
}

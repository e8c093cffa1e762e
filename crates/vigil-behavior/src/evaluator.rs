//! Rule evaluator — applies the registry to one prediction event.

use vigil_core::models::{BehaviorFinding, PredictionEvent, TriggerValues};

use crate::rules::RuleSet;

/// Evaluates events against the rule registry. No side effects; never
/// consults or mutates the alert store.
pub struct RuleEvaluator {
    rules: RuleSet,
}

impl RuleEvaluator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// All applicable rules fire, in registration order. A single event can
    /// yield multiple findings.
    pub fn evaluate(&self, event: &PredictionEvent) -> Vec<BehaviorFinding> {
        let mut findings = Vec::new();
        for rule in self.rules.iter() {
            if rule.applies(event) {
                tracing::debug!(rule = rule.name(), model = %event.model_name, "behavior rule fired");
                findings.push(BehaviorFinding {
                    rule: rule.name().to_string(),
                    severity: rule.severity(),
                    description: rule.description().to_string(),
                    trigger: TriggerValues::Event {
                        event: event.clone(),
                    },
                });
            }
        }
        findings
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}

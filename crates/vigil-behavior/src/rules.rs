//! Behavior rule registry — rules as data, not branching code.
//!
//! Each rule is a (name, predicate, severity) tuple registered on a
//! `RuleSet`. Adding a rule never touches evaluator control flow.

use vigil_core::config::BehaviorConfig;
use vigil_core::models::{PredictionEvent, Severity};

type RulePredicate = Box<dyn Fn(&PredictionEvent) -> bool + Send + Sync>;

/// One declarative predicate over a prediction event.
pub struct Rule {
    name: String,
    severity: Severity,
    description: String,
    predicate: RulePredicate,
}

impl Rule {
    pub fn new(
        name: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
        predicate: impl Fn(&PredictionEvent) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            severity,
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn applies(&self, event: &PredictionEvent) -> bool {
        (self.predicate)(event)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("severity", &self.severity)
            .finish_non_exhaustive()
    }
}

/// Ordered rule registry. Evaluation order is registration order.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// The default registry, thresholds taken from config.
    pub fn from_config(config: &BehaviorConfig) -> Self {
        let entropy_threshold = config.entropy_threshold;
        let conf_min = config.low_confidence_min;
        let conf_max = config.low_confidence_max;
        let high_value = config.high_value_amount;
        let value_confidence = config.low_confidence_for_value;

        Self::default()
            .with_rule(Rule::new(
                "high_prediction_entropy",
                Severity::Medium,
                "Model uncertainty exceeds safe threshold",
                move |e| e.entropy > entropy_threshold,
            ))
            .with_rule(Rule::new(
                "low_model_confidence",
                Severity::Medium,
                "Prediction probability in borderline range",
                move |e| e.probability >= conf_min && e.probability <= conf_max,
            ))
            .with_rule(Rule::new(
                "high_value_low_confidence",
                Severity::High,
                "High-value transaction scored with low confidence",
                move |e| e.amount >= high_value && e.confidence < value_confidence,
            ))
    }

    /// Append a rule. Evaluator logic is untouched by new rules.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

//! # vigil-behavior
//!
//! Rule-based behavioral anomaly evaluation. Rules are data (name +
//! predicate + severity registered on a `RuleSet`), evaluated in a fixed
//! order against individual prediction events; a separate silent-shift check
//! compares aggregate prediction statistics to a behavioral baseline.

pub mod evaluator;
pub mod rules;
pub mod shift;

pub use evaluator::RuleEvaluator;
pub use rules::{Rule, RuleSet};
pub use shift::detect_silent_shift;

//! Default values for all tunable parameters.

// Drift detection
pub const DEFAULT_P_VALUE_THRESHOLD: f64 = 0.05;
pub const DEFAULT_NUMERIC_STATISTIC_THRESHOLD: f64 = 0.1;
pub const DEFAULT_CATEGORICAL_STATISTIC_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MAX_BATCH_ROWS: usize = 100_000;

// Severity breakpoints on the aggregate drift score.
pub const DEFAULT_BREAKPOINT_LOW: f64 = 0.1;
pub const DEFAULT_BREAKPOINT_MEDIUM: f64 = 0.3;
pub const DEFAULT_BREAKPOINT_HIGH: f64 = 0.6;

// Behavior rules
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 0.45;
pub const DEFAULT_LOW_CONFIDENCE_MIN: f64 = 0.4;
pub const DEFAULT_LOW_CONFIDENCE_MAX: f64 = 0.6;
pub const DEFAULT_HIGH_VALUE_AMOUNT: f64 = 10_000.0;
pub const DEFAULT_LOW_CONFIDENCE_FOR_VALUE: f64 = 0.7;

// Silent-shift detection
pub const DEFAULT_HIGH_RISK_PROBABILITY: f64 = 0.8;
pub const DEFAULT_RISK_RATIO_UPPER_FACTOR: f64 = 1.5;
pub const DEFAULT_RISK_RATIO_LOWER_BOUND: f64 = 0.30;

// Alerting
pub const DEFAULT_COOLDOWN_MINUTES: u64 = 10;
pub const DEFAULT_ESCALATION_CYCLES: u32 = 3;
pub const DEFAULT_DEDUP_RETENTION_FACTOR: u32 = 6;

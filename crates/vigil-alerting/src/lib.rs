//! # vigil-alerting
//!
//! Maps detector and evaluator findings into severity-tagged alert records,
//! suppresses redundant repeats within a cooldown window, escalates
//! conditions that persist, and persists surviving records to the alert
//! store.

pub mod classifier;
pub mod dedup;
pub mod events;
pub mod store;

pub use classifier::{AlertCandidate, AlertClassifier};
pub use dedup::{DedupKey, Deduplicator, Outcome};
pub use store::SqliteAlertStore;

//! # vigil-engine
//!
//! MonitorEngine — central orchestrator. Wires the reference store, drift
//! detector, rule evaluator, classifier, and deduplicator together and
//! persists surviving alerts to the configured store.

pub mod engine;
pub mod report;

pub use engine::MonitorEngine;
pub use report::CheckReport;

//! # vigil-drift
//!
//! Reference store (atomic baseline snapshot handoff) and the drift
//! detector: per-feature two-sample tests against the active baseline,
//! aggregated into a verdict.

pub mod baseline;
pub mod detector;
pub mod reference;
pub mod stats;

pub use baseline::build_snapshot;
pub use detector::DriftDetector;
pub use reference::ReferenceStore;

//! Trait seams between the engine and its external collaborators.

pub mod alert_store;

pub use alert_store::IAlertStore;

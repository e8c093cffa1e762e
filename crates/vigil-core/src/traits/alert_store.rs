//! Alert store contract — append-only persistence for alert records.

use crate::errors::StorageError;
use crate::models::{AlertQuery, AlertRecord};

/// Durable, append-only log of alert records.
///
/// `append` must fail with `StorageError::Unavailable` when the backing
/// store cannot be written; the engine surfaces that to its caller instead
/// of losing the alert silently. Callers are expected to retry the append.
pub trait IAlertStore: Send + Sync {
    fn append(&self, record: &AlertRecord) -> Result<(), StorageError>;

    /// Query stored alerts, ordered by timestamp descending.
    fn query(&self, query: &AlertQuery) -> Result<Vec<AlertRecord>, StorageError>;
}

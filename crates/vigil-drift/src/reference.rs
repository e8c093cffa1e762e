//! Reference store — holds the single active baseline snapshot.
//!
//! Read-many/write-one discipline: readers take an `Arc` handle at the start
//! of a check and use it throughout, so a concurrent replacement never tears
//! the baseline under a running check.

use std::sync::{Arc, RwLock};

use vigil_core::errors::SnapshotError;
use vigil_core::models::ReferenceSnapshot;

/// Owner of the active reference snapshot. Replacement is an atomic pointer
/// swap, never a field-level mutation.
pub struct ReferenceStore {
    active: RwLock<Arc<ReferenceSnapshot>>,
}

impl ReferenceStore {
    /// Create a store with an initial, validated snapshot.
    pub fn new(initial: ReferenceSnapshot) -> Result<Self, SnapshotError> {
        initial.validate()?;
        Ok(Self {
            active: RwLock::new(Arc::new(initial)),
        })
    }

    /// Handle to the currently active snapshot. The returned `Arc` stays
    /// valid for the whole check even if a replacement lands mid-check.
    pub fn active(&self) -> Arc<ReferenceSnapshot> {
        self.active
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Atomically swap in a new snapshot. Rejects invalid snapshots without
    /// touching the active handle.
    pub fn replace(&self, new: ReferenceSnapshot) -> Result<(), SnapshotError> {
        new.validate()?;
        let mut guard = self
            .active
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::new(new);
        tracing::info!(
            row_count = guard.row_count,
            features = guard.features.len(),
            "reference snapshot replaced"
        );
        Ok(())
    }
}

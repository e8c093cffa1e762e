//! Error taxonomy for the monitoring engine, one enum per domain plus the
//! `VigilError` umbrella used at crate boundaries.

pub mod config_error;
pub mod drift_error;
pub mod snapshot_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use drift_error::DriftError;
pub use snapshot_error::SnapshotError;
pub use storage_error::StorageError;

/// Umbrella error for engine-level operations.
#[derive(Debug, thiserror::Error)]
pub enum VigilError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Drift(#[from] DriftError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used across the workspace.
pub type VigilResult<T> = Result<T, VigilError>;

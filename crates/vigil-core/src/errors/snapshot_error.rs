/// Reference-snapshot errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("malformed snapshot payload: {message}")]
    Malformed { message: String },
}

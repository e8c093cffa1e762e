/// Alert-store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing store could not be written or read. Propagated to the
    /// caller, never retried internally.
    #[error("alert store unavailable: {message}")]
    Unavailable { message: String },

    /// A stored row could not be decoded back into an alert record.
    #[error("alert store corruption detected: {details}")]
    CorruptionDetected { details: String },
}

/// Drift-detector errors.
#[derive(Debug, thiserror::Error)]
pub enum DriftError {
    /// The detector refuses to produce a verdict on no data rather than
    /// silently reporting "no drift".
    #[error("drift check rejected: batch has zero rows")]
    EmptyBatch,

    /// The batch feature set diverged from the snapshot schema. Surfaced to
    /// the caller so it can be raised as a silent-failure alert, never
    /// swallowed.
    #[error("schema mismatch: missing {missing:?}, unexpected {unexpected:?}")]
    SchemaMismatch {
        /// Snapshot features absent from the batch.
        missing: Vec<String>,
        /// Batch features absent from the snapshot.
        unexpected: Vec<String>,
    },

    #[error("batch exceeds the maximum of {max} rows: {rows}")]
    BatchTooLarge { rows: usize, max: usize },
}

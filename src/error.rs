use thiserror::Error;

/// Errors raised while loading the database seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Seed file exists but could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    /// Seed file is not valid JSON for the expected shape.
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two records of the same kind share an identifier.
    #[error("duplicate {kind} id `{id}` in seed")]
    DuplicateId {
        /// Entity kind holding the duplicate.
        kind: &'static str,
        /// The repeated identifier.
        id: String,
    },
    /// A numeric identifier is too large to continue allocating after it.
    #[error("{kind} id `{id}` exceeds the maximum of {max}")]
    IdOutOfRange {
        /// Entity kind holding the identifier.
        kind: &'static str,
        /// The oversized identifier.
        id: String,
        /// Largest accepted numeric identifier.
        max: u64,
    },
}

use thiserror::Error;

/// Errors raised at the store boundary.
///
/// Job-level errors are fatal to the current operation; per-row rejections
/// travel inside `ChunkOutcome` instead and never abort the batch.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("import job not found: {0}")]
    NotFound(String),
    #[error("invalid job state: {0}")]
    InvalidState(String),
    #[error("chunk transport failure: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

use reelvault_models::ValidationError;
use thiserror::Error;

/// Everything a store operation can fail with. All four variants are
/// surfaced to the caller as-is; none of them leaves the persisted
/// document partially updated.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Caller-supplied content failed a precondition. No state was read
    /// or written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No movie carries the given slug.
    #[error("no movie with slug `{0}`")]
    NotFound(String),

    /// The persisted bytes do not parse as a catalog document. Fatal
    /// for every operation until the file is repaired or reset; the
    /// store never discards the file on its own.
    #[error("catalog file is corrupt: {0}")]
    CorruptStore(#[source] serde_json::Error),

    /// Reading or writing the document file failed. The mutation was
    /// not applied and the previously persisted state is intact.
    #[error("failed to persist catalog: {0}")]
    Persistence(#[from] std::io::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

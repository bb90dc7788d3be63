use thiserror::Error;

/// Rejection of caller-supplied content before any state is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("comment text is empty")]
    EmptyText,
    #[error("request title is empty")]
    EmptyTitle,
    #[error("upload filename is empty after sanitization")]
    EmptyFilename,
    #[error("upload exceeds the configured size limit ({limit} bytes)")]
    TooLarge { limit: u64 },
}

use thiserror::Error;

/// Errors surfaced by a document store backend.
///
/// The data layer performs no translation or recovery on these; they
/// propagate to the caller exactly as the store reported them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid collection path: {0}")]
    InvalidPath(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Store error: {0}")]
    Backend(String),
}

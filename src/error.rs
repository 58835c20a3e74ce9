use thiserror::Error;

use crate::store::StoreError;

/// Failure of a repository read.
///
/// `TenantNotSet` is a caller/UI bug: a scoped read was attempted before a
/// pharmacy was selected. It must be surfaced, not retried, and is never
/// reported as an empty result. Store failures pass through unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("Pharmacy location not set")]
    TenantNotSet,

    #[error(transparent)]
    Store(#[from] StoreError),
}

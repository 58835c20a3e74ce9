pub mod document;
pub mod error;
pub mod memory;
pub mod path;

use async_trait::async_trait;

pub use document::{Document, Record};
pub use error::StoreError;
pub use path::CollectionPath;

/// Read access to a hierarchical collection/document database.
///
/// These are the only three read shapes the client consumes. This layer
/// performs no writes, transactions, or listeners against the store;
/// timeout and cancellation policy belong to the implementation.
///
/// Result ordering is store-defined and not guaranteed stable.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All documents in the collection at `path`.
    async fn list_documents(&self, path: &CollectionPath) -> Result<Vec<Document>, StoreError>;

    /// A single document by id, or `None` if absent.
    async fn get_document(
        &self,
        path: &CollectionPath,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Documents whose string value for `field` falls in the half-open
    /// range `[start, end)` under lexicographic (codepoint) order.
    async fn query_range(
        &self,
        path: &CollectionPath,
        field: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Document>, StoreError>;
}

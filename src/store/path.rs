use std::fmt;

use super::error::StoreError;

/// Slash-joined location of a collection in the document store,
/// e.g. `Pharmacies/ph1/medicines`.
///
/// Paths are only ever built inside this crate; callers of the repository
/// never construct one directly. Each segment is validated so that a
/// caller-supplied identifier containing `/` (or an empty string) cannot
/// widen the path beyond its intended scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionPath {
    segments: Vec<String>,
}

impl CollectionPath {
    /// Top-level collection, e.g. `Pharmacies`.
    pub fn root(name: &str) -> Result<Self, StoreError> {
        validate_segment(name)?;
        Ok(Self {
            segments: vec![name.to_string()],
        })
    }

    /// Sub-collection under a document of this collection:
    /// `Pharmacies` + (`ph1`, `medicines`) -> `Pharmacies/ph1/medicines`.
    pub fn child(&self, document_id: &str, collection: &str) -> Result<Self, StoreError> {
        validate_segment(document_id)?;
        validate_segment(collection)?;
        let mut segments = self.segments.clone();
        segments.push(document_id.to_string());
        segments.push(collection.to_string());
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for CollectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn validate_segment(segment: &str) -> Result<(), StoreError> {
    if segment.is_empty() {
        return Err(StoreError::InvalidPath(
            "path segment cannot be empty".to_string(),
        ));
    }
    if segment.contains('/') {
        return Err(StoreError::InvalidPath(format!(
            "path segment cannot contain '/': {}",
            segment
        )));
    }
    Ok(())
}

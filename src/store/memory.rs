use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, RwLock};

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::document::Document;
use super::error::StoreError;
use super::path::CollectionPath;
use super::DocumentStore;

/// In-memory reference implementation of [`DocumentStore`].
///
/// Backs the test suite and the fixture-driven CLI; it is not a cache in
/// front of a real backend. Documents are held per collection path, keyed
/// by id. Every read is counted and its path recorded so tests can assert
/// exactly which collections were touched.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<String, Map<String, Value>>>>,
    reads: AtomicUsize,
    paths_read: Mutex<Vec<String>>,
    failure: Mutex<Option<StoreError>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document with a store-assigned id, returning the id.
    pub fn insert(&self, path: &str, fields: Map<String, Value>) -> String {
        let id = Uuid::new_v4().to_string();
        self.insert_with_id(path, &id, fields);
        id
    }

    pub fn insert_with_id(&self, path: &str, id: &str, fields: Map<String, Value>) {
        let mut collections = self.collections.write().unwrap();
        collections
            .entry(path.to_string())
            .or_default()
            .insert(id.to_string(), fields);
    }

    /// Load a fixture value: an object mapping collection paths to an
    /// object of `id -> fields`, e.g.
    ///
    /// ```json
    /// {
    ///   "Pharmacies": { "ph1": { "name": "Main St" } },
    ///   "Pharmacies/ph1/medicines": { "m1": { "name": "aspirin" } }
    /// }
    /// ```
    pub fn load_fixture(&self, fixture: &Value) -> Result<(), StoreError> {
        let collections = fixture.as_object().ok_or_else(|| {
            StoreError::Backend("fixture root must be an object of collection paths".to_string())
        })?;

        for (path, docs) in collections {
            let docs = docs.as_object().ok_or_else(|| {
                StoreError::Backend(format!("fixture collection '{}' must be an object", path))
            })?;
            for (id, fields) in docs {
                let fields = fields.as_object().cloned().ok_or_else(|| {
                    StoreError::Backend(format!(
                        "fixture document '{}/{}' must be an object",
                        path, id
                    ))
                })?;
                self.insert_with_id(path, id, fields);
            }
        }
        Ok(())
    }

    /// Make every subsequent read fail with `error` (or succeed again when
    /// `None`). Used by tests to exercise pass-through of store failures.
    pub fn set_failure(&self, error: Option<StoreError>) {
        *self.failure.lock().unwrap() = error;
    }

    /// Number of reads issued against this store.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    /// Collection paths touched by reads, in order.
    pub fn paths_read(&self) -> Vec<String> {
        self.paths_read.lock().unwrap().clone()
    }

    fn record_read(&self, path: &CollectionPath) -> Result<(), StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.paths_read.lock().unwrap().push(path.to_string());
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list_documents(&self, path: &CollectionPath) -> Result<Vec<Document>, StoreError> {
        self.record_read(path)?;
        let collections = self.collections.read().unwrap();
        let docs = collections
            .get(&path.to_string())
            .map(|collection| {
                collection
                    .iter()
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn get_document(
        &self,
        path: &CollectionPath,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        self.record_read(path)?;
        let collections = self.collections.read().unwrap();
        let doc = collections
            .get(&path.to_string())
            .and_then(|collection| collection.get(id))
            .map(|fields| Document::new(id, fields.clone()));
        Ok(doc)
    }

    async fn query_range(
        &self,
        path: &CollectionPath,
        field: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Document>, StoreError> {
        self.record_read(path)?;
        let collections = self.collections.read().unwrap();
        let docs = collections
            .get(&path.to_string())
            .map(|collection| {
                collection
                    .iter()
                    .filter(|(_, fields)| {
                        fields
                            .get(field)
                            .and_then(Value::as_str)
                            .map(|value| value >= start && value < end)
                            .unwrap_or(false)
                    })
                    .map(|(id, fields)| Document::new(id.clone(), fields.clone()))
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }
}

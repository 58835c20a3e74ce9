use tracing::debug;

use crate::context::TenantContext;
use crate::error::FetchError;
use crate::store::{CollectionPath, DocumentStore, Record};

/// Tenant root collection; one document per pharmacy.
const PHARMACIES: &str = "Pharmacies";
/// Global reference catalog, never tenant-scoped.
const CATALOG: &str = "medicinesCatalog";

const MEDICINES: &str = "medicines";
const BATCHES: &str = "batches";
const REQUESTS: &str = "requests";
const STAFF: &str = "staff";

/// Upper sentinel appended to a search term to close the prefix range.
/// U+F8FF sorts after every character that can appear in a medicine name,
/// so `[term, term + U+F8FF)` covers exactly the names starting with `term`.
const PREFIX_SENTINEL: char = '\u{f8ff}';

/// Read access to pharmacy data, with every tenant-scoped collection path
/// built here and nowhere else.
///
/// Scoped reads require the caller's [`TenantContext`] to carry a pharmacy
/// id and fail with [`FetchError::TenantNotSet`] before touching the store
/// otherwise. The two unscoped reads ([`fetch_pharmacies`] and
/// [`fetch_catalog`]) are global reference data and take no context at all.
///
/// All reads are side-effect free: no caching, no retry, store failures
/// propagate unchanged.
///
/// [`fetch_pharmacies`]: PharmacyRepository::fetch_pharmacies
/// [`fetch_catalog`]: PharmacyRepository::fetch_catalog
pub struct PharmacyRepository<S> {
    store: S,
}

impl<S: DocumentStore> PharmacyRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All medicines of the current pharmacy.
    pub async fn fetch_medicines(&self, ctx: &TenantContext) -> Result<Vec<Record>, FetchError> {
        let path = self.scoped(ctx, MEDICINES)?;
        self.list(&path).await
    }

    /// A single medicine by id, or `None` if absent.
    pub async fn fetch_medicine(
        &self,
        ctx: &TenantContext,
        medicine_id: &str,
    ) -> Result<Option<Record>, FetchError> {
        let path = self.scoped(ctx, MEDICINES)?;
        debug!(path = %path, id = medicine_id, "fetching document");
        let doc = self.store.get_document(&path, medicine_id).await?;
        Ok(doc.map(|doc| doc.into_record()))
    }

    /// Medicines of the current pharmacy whose `name` starts with `term`.
    ///
    /// The match is a case-sensitive prefix range over the store's `name`
    /// index: `"asp"` finds `aspirin` but neither `Aspirin` nor `baspirin`.
    pub async fn search_medicines(
        &self,
        ctx: &TenantContext,
        term: &str,
    ) -> Result<Vec<Record>, FetchError> {
        let path = self.scoped(ctx, MEDICINES)?;
        let end = format!("{}{}", term, PREFIX_SENTINEL);
        debug!(path = %path, term, "searching medicines by name prefix");
        let docs = self.store.query_range(&path, "name", term, &end).await?;
        Ok(docs.into_iter().map(|doc| doc.into_record()).collect())
    }

    /// Batches recorded under one medicine of the current pharmacy.
    pub async fn fetch_batches_for_medicine(
        &self,
        ctx: &TenantContext,
        medicine_id: &str,
    ) -> Result<Vec<Record>, FetchError> {
        let path = self
            .scoped(ctx, MEDICINES)?
            .child(medicine_id, BATCHES)
            .map_err(FetchError::Store)?;
        self.list(&path).await
    }

    /// The pharmacy-wide batches collection.
    pub async fn fetch_all_batches(&self, ctx: &TenantContext) -> Result<Vec<Record>, FetchError> {
        let path = self.scoped(ctx, BATCHES)?;
        self.list(&path).await
    }

    /// All requests of the current pharmacy.
    pub async fn fetch_requests(&self, ctx: &TenantContext) -> Result<Vec<Record>, FetchError> {
        let path = self.scoped(ctx, REQUESTS)?;
        self.list(&path).await
    }

    /// All staff members (doctors, nurses) of the current pharmacy.
    pub async fn fetch_staff(&self, ctx: &TenantContext) -> Result<Vec<Record>, FetchError> {
        let path = self.scoped(ctx, STAFF)?;
        self.list(&path).await
    }

    /// Every pharmacy. Tenant-root data: available before a pharmacy is
    /// selected, so this takes no tenant context.
    pub async fn fetch_pharmacies(&self) -> Result<Vec<Record>, FetchError> {
        let path = CollectionPath::root(PHARMACIES).map_err(FetchError::Store)?;
        self.list(&path).await
    }

    /// The global medicines catalog. Reference data shared by all
    /// pharmacies, never tenant-scoped.
    pub async fn fetch_catalog(&self) -> Result<Vec<Record>, FetchError> {
        let path = CollectionPath::root(CATALOG).map_err(FetchError::Store)?;
        self.list(&path).await
    }

    /// Path of a sub-collection under the current pharmacy.
    ///
    /// The pharmacy id is read exactly once, here; the path it produced
    /// stays fixed for the lifetime of the read even if the context is
    /// swapped while the store call is in flight.
    fn scoped(&self, ctx: &TenantContext, collection: &str) -> Result<CollectionPath, FetchError> {
        let pharmacy_id = ctx.pharmacy_id().ok_or(FetchError::TenantNotSet)?;
        let path = CollectionPath::root(PHARMACIES)
            .and_then(|root| root.child(pharmacy_id, collection))
            .map_err(FetchError::Store)?;
        Ok(path)
    }

    async fn list(&self, path: &CollectionPath) -> Result<Vec<Record>, FetchError> {
        debug!(path = %path, "listing collection");
        let docs = self.store.list_documents(path).await?;
        Ok(docs.into_iter().map(|doc| doc.into_record()).collect())
    }
}

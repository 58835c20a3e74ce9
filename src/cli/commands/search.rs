use crate::cli::{utils, OutputFormat};
use crate::context::TenantContext;
use crate::repository::PharmacyRepository;
use crate::store::memory::MemoryStore;

pub async fn handle(
    term: &str,
    repository: &PharmacyRepository<MemoryStore>,
    tenant: &TenantContext,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let records = repository.search_medicines(tenant, term).await?;
    utils::output_records(&output_format, "matches", &records)
}

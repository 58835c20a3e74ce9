use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use serde_json::Value;

use crate::cli::{utils, OutputFormat};
use crate::context::TenantContext;
use crate::repository::PharmacyRepository;
use crate::store::memory::MemoryStore;
use crate::store::Record;

#[derive(Subcommand)]
pub enum DataCommands {
    #[command(about = "List medicines of the selected pharmacy")]
    Medicines,

    #[command(about = "Show a single medicine by id")]
    Medicine {
        #[arg(help = "Medicine id")]
        id: String,
    },

    #[command(about = "List batches, pharmacy-wide or for one medicine")]
    Batches {
        #[arg(long, help = "Limit to batches of this medicine id")]
        medicine: Option<String>,
    },

    #[command(about = "List requests of the selected pharmacy")]
    Requests,

    #[command(about = "List staff members of the selected pharmacy")]
    Staff,

    #[command(about = "List the global medicines catalog")]
    Catalog,

    #[command(about = "List all pharmacies")]
    Pharmacies,
}

pub async fn handle(
    cmd: DataCommands,
    repository: &PharmacyRepository<MemoryStore>,
    tenant: &TenantContext,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        DataCommands::Medicines => {
            let records = repository.fetch_medicines(tenant).await?;
            utils::output_records(&output_format, "medicines", &records)
        }
        DataCommands::Medicine { id } => match repository.fetch_medicine(tenant, &id).await? {
            Some(record) => utils::output_record(&output_format, &record),
            None => utils::output_error(&output_format, &format!("medicine not found: {}", id)),
        },
        DataCommands::Batches { medicine } => {
            let records = match medicine {
                Some(medicine_id) => {
                    repository
                        .fetch_batches_for_medicine(tenant, &medicine_id)
                        .await?
                }
                None => repository.fetch_all_batches(tenant).await?,
            };
            output_batches(&output_format, &records)
        }
        DataCommands::Requests => {
            let records = repository.fetch_requests(tenant).await?;
            utils::output_records(&output_format, "requests", &records)
        }
        DataCommands::Staff => {
            let records = repository.fetch_staff(tenant).await?;
            utils::output_records(&output_format, "staff", &records)
        }
        DataCommands::Catalog => {
            let records = repository.fetch_catalog().await?;
            utils::output_records(&output_format, "catalog entries", &records)
        }
        DataCommands::Pharmacies => {
            let records = repository.fetch_pharmacies().await?;
            utils::output_records(&output_format, "pharmacies", &records)
        }
    }
}

fn output_batches(output_format: &OutputFormat, records: &[Record]) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => utils::output_records(output_format, "batches", records),
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No batches found");
                return Ok(());
            }
            println!("batches ({}):", records.len());
            for record in records {
                let marker = if is_expired(record) { " (expired)" } else { "" };
                let number = record
                    .get("batchNumber")
                    .and_then(Value::as_str)
                    .unwrap_or(record.id());
                let expiry = record
                    .get("expiryDate")
                    .and_then(Value::as_str)
                    .unwrap_or("no expiry");
                println!("  {} - {}{}", number, expiry, marker);
            }
            Ok(())
        }
    }
}

fn is_expired(record: &Record) -> bool {
    record
        .get("expiryDate")
        .and_then(Value::as_str)
        .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .map(|expiry| expiry < Utc::now().date_naive())
        .unwrap_or(false)
}

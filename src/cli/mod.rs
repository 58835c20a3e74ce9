pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::context::{RequestContext, TenantContext};
use crate::repository::PharmacyRepository;
use crate::store::memory::MemoryStore;

#[derive(Parser)]
#[command(name = "pharmacy")]
#[command(about = "Pharmacy CLI - tenant-scoped reads against a fixture-backed document store")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Fixture file (JSON or YAML) backing the store")]
    pub fixture: Option<String>,

    #[arg(long, global = true, help = "Pharmacy id to scope reads to")]
    pub pharmacy: Option<String>,

    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "List and show pharmacy data")]
    Data {
        #[command(subcommand)]
        cmd: commands::data::DataCommands,
    },

    #[command(about = "Search medicines by name prefix (case-sensitive)")]
    Search {
        #[arg(help = "Name prefix to search for")]
        term: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    let fixture_path = cli
        .fixture
        .clone()
        .or_else(|| config::config().store.fixture_path.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("no fixture file; pass --fixture <path> or set PHARMACY_FIXTURE")
        })?;

    let store = MemoryStore::new();
    let fixture = utils::load_fixture_file(&fixture_path)?;
    store.load_fixture(&fixture)?;
    let repository = PharmacyRepository::new(store);

    // The CLI invocation is the navigation boundary: build the context once
    // and pass it down read-only.
    let mut context = RequestContext::new();
    if let Some(pharmacy) = cli
        .pharmacy
        .clone()
        .or_else(|| std::env::var("PHARMACY_ID").ok())
    {
        context.set_tenant(TenantContext::for_pharmacy(pharmacy));
    }

    match cli.command {
        Commands::Data { cmd } => {
            commands::data::handle(cmd, &repository, context.tenant(), output_format).await
        }
        Commands::Search { term } => {
            commands::search::handle(&term, &repository, context.tenant(), output_format).await
        }
    }
}

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::store::Record;

/// Read a fixture file as JSON, or YAML for `.yaml`/`.yml` extensions.
pub fn load_fixture_file(path: &str) -> anyhow::Result<Value> {
    let raw = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read fixture '{}': {}", path, e))?;

    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let value = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&raw)?,
        _ => serde_json::from_str(&raw)?,
    };
    Ok(value)
}

/// Print a list of records in the selected format.
pub fn output_records(
    output_format: &OutputFormat,
    collection_name: &str,
    records: &[Record],
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Text => {
            if records.is_empty() {
                println!("No {} found", collection_name);
                return Ok(());
            }
            println!("{} ({}):", collection_name, records.len());
            for record in records {
                println!("  {}", describe_record(record));
            }
        }
    }
    Ok(())
}

/// Print a single record in the selected format.
pub fn output_record(output_format: &OutputFormat, record: &Record) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text => {
            println!("{}", describe_record(record));
        }
    }
    Ok(())
}

/// Output an error message in the appropriate format
pub fn output_error(
    output_format: &OutputFormat,
    message: &str,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "success": false,
                    "error": message
                }))?
            );
        }
        OutputFormat::Text => {
            eprintln!("Error: {}", message);
        }
    }
    Ok(())
}

fn describe_record(record: &Record) -> String {
    match record.get("name").and_then(Value::as_str) {
        Some(name) => format!("{} [{}]", name, record.id()),
        None => format!("[{}]", record.id()),
    }
}

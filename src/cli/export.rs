//! CLI command for data export

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{csv, json, yaml, ExportFormat};
use crate::storage::Storage;

/// Handle `budget export`; writes to stdout when no output file is given
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<&Path>,
    pretty: bool,
) -> BudgetResult<()> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(storage, format, &mut writer, pretty)?;
            writer.flush()?;

            match format {
                ExportFormat::Csv => {
                    println!("Transactions exported to: {}", path.display());
                    println!("Note: CSV format exports transactions only. Use JSON or YAML for a full snapshot.");
                }
                ExportFormat::Json | ExportFormat::Yaml => {
                    println!("Full snapshot exported to: {}", path.display());
                }
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(storage, format, &mut writer, pretty)?;
            if format == ExportFormat::Json {
                writeln!(writer)?;
            }
            writer.flush()?;
        }
    }

    tracing::info!(%format, "export complete");
    Ok(())
}

fn write_export<W: Write>(
    storage: &Storage,
    format: ExportFormat,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => json::export_full_json(storage, writer, pretty),
        ExportFormat::Yaml => yaml::export_full_yaml(storage, writer),
        ExportFormat::Csv => csv::export_transactions_csv(storage, writer).map(|_| ()),
    }
}

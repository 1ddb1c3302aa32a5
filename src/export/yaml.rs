//! YAML export
//!
//! Same snapshot as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full ledger to YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# budget-ledger export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

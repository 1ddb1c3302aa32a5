//! JSON export
//!
//! Writes a versioned snapshot of the whole ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{LedgerItem, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub incomes: Vec<LedgerItem>,
    pub accounts: Vec<LedgerItem>,
    pub expenses: Vec<LedgerItem>,
    pub transactions: Vec<Transaction>,

    /// Settings keyed as stored, e.g. `currencySymbol`
    pub settings: Map<String, Value>,
}

impl FullExport {
    /// Snapshot everything currently in storage
    pub fn from_storage(storage: &Storage) -> BudgetResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            incomes: storage.incomes.get_all()?,
            accounts: storage.accounts.get_all()?,
            expenses: storage.expenses.get_all()?,
            transactions: storage.transactions.get_all()?,
            settings: storage.settings.get_all()?,
        })
    }

    /// Number of records across the four ledger collections
    pub fn record_count(&self) -> usize {
        self.incomes.len() + self.accounts.len() + self.expenses.len() + self.transactions.len()
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> BudgetResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::NewItem;
    use crate::services::{BudgetService, SettingsService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_snapshot() {
        let (_temp_dir, storage) = create_test_storage();
        let mut budget = BudgetService::new(&storage);
        let wallet = budget
            .add_account(NewItem::new("Wallet", "100").include_in_balance(true))
            .unwrap();
        let rent = budget.add_expense(NewItem::new("Rent", "0")).unwrap();
        budget.add_income(NewItem::new("Salary", "2500")).unwrap();
        budget
            .transfer(&wallet, &rent, crate::models::Money::from_units(30.0))
            .unwrap();
        SettingsService::new(&storage).set_currency_symbol("€").unwrap();

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, true).unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["accounts"][0]["name"], "Wallet");
        assert_eq!(value["accounts"][0]["amount"], 70);
        assert_eq!(value["accounts"][0]["includeInBalance"], true);
        assert_eq!(value["expenses"][0]["type"], "expense");
        assert_eq!(value["incomes"][0]["amount"], 2500);
        assert_eq!(value["transactions"][0]["from"], "Wallet");
        assert_eq!(value["transactions"][0]["amount"], 30);
        assert_eq!(value["settings"]["currencySymbol"], "€");
    }

    #[test]
    fn test_export_empty_ledger() {
        let (_temp_dir, storage) = create_test_storage();

        let export = FullExport::from_storage(&storage).unwrap();
        assert_eq!(export.record_count(), 0);
        assert!(export.settings.is_empty());

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, false).unwrap();
        let parsed: FullExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.app_version, env!("CARGO_PKG_VERSION"));
    }
}

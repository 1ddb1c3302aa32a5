//! Settings service
//!
//! Holds the display preferences. Today that is only the currency symbol.

use serde_json::Value;

use crate::error::BudgetResult;
use crate::storage::Storage;

/// Key of the currency symbol in the settings collection
pub const CURRENCY_SYMBOL_KEY: &str = "currencySymbol";

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

pub struct SettingsService<'a> {
    storage: &'a Storage,
    currency_symbol: String,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }

    /// Load the stored currency symbol; an absent or empty value keeps the
    /// current one
    pub fn init(&mut self) -> BudgetResult<()> {
        if let Some(Value::String(saved)) = self.storage.settings.get(CURRENCY_SYMBOL_KEY)? {
            if !saved.is_empty() {
                self.currency_symbol = saved;
            }
        }
        Ok(())
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Change the currency symbol. The value is not validated.
    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) -> BudgetResult<()> {
        let symbol = symbol.into();
        self.currency_symbol.clone_from(&symbol);
        self.storage
            .settings
            .put(Value::String(symbol), CURRENCY_SYMBOL_KEY)?;

        tracing::info!(symbol = %self.currency_symbol, "currency symbol updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_default_symbol() {
        let (_temp_dir, storage) = create_test_storage();
        let mut service = SettingsService::new(&storage);
        service.init().unwrap();

        assert_eq!(service.currency_symbol(), "$");
    }

    #[test]
    fn test_set_and_reload() {
        let (_temp_dir, storage) = create_test_storage();
        SettingsService::new(&storage).set_currency_symbol("€").unwrap();

        let reopened = Storage::new(storage.paths().clone()).unwrap();
        reopened.load_all().unwrap();
        let mut service = SettingsService::new(&reopened);
        service.init().unwrap();

        assert_eq!(service.currency_symbol(), "€");
    }

    #[test]
    fn test_empty_stored_symbol_keeps_default() {
        let (_temp_dir, storage) = create_test_storage();
        storage.settings.put(json!(""), CURRENCY_SYMBOL_KEY).unwrap();

        let mut service = SettingsService::new(&storage);
        service.init().unwrap();

        assert_eq!(service.currency_symbol(), "$");
    }

    #[test]
    fn test_symbol_is_not_validated() {
        let (_temp_dir, storage) = create_test_storage();
        let mut service = SettingsService::new(&storage);

        service.set_currency_symbol("CHF ").unwrap();
        assert_eq!(service.currency_symbol(), "CHF ");
    }
}

//! Service layer for budget-ledger
//!
//! The service layer holds application state on top of the storage layer:
//! the in-memory ledger with its transfer logic, and the user's settings.

pub mod budget;
pub mod settings;

pub use budget::{BudgetService, BudgetSummary};
pub use settings::{SettingsService, CURRENCY_SYMBOL_KEY, DEFAULT_CURRENCY_SYMBOL};

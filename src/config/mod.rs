//! Configuration module for budget-ledger
//!
//! Resolves where the local database lives. User preferences (the currency
//! symbol) are not configuration; they are persisted in the settings
//! collection and managed by [`crate::services::SettingsService`].

pub mod paths;

pub use paths::{BudgetPaths, DATA_DIR_ENV};

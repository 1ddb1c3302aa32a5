//! budget-ledger - a personal budget tracker
//!
//! Tracks incomes, accounts and expenses, moves money between them with
//! revertible transfers, and keeps everything in a small local JSON database.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution for the local database
//! - `error`: Custom error types
//! - `models`: Ledger items, transactions, money and ids
//! - `storage`: JSON file collections and the settings store
//! - `services`: Budget and settings state on top of storage
//! - `routes`: The table of routed views
//! - `display`: Text rendering of each view
//! - `export`: JSON, YAML and CSV export
//! - `input`: Pointer gestures (long press)
//! - `cli`: Command handlers for the `budget` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_ledger::config::BudgetPaths;
//! use budget_ledger::services::BudgetService;
//! use budget_ledger::storage::Storage;
//!
//! let storage = Storage::new(BudgetPaths::new()?)?;
//! storage.load_all()?;
//! let mut budget = BudgetService::new(&storage);
//! budget.init()?;
//! println!("{}", budget.balance());
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod input;
pub mod models;
pub mod routes;
pub mod services;
pub mod storage;

pub use error::BudgetError;

//! Core data models for budget-ledger
//!
//! Ledger items (incomes, accounts, expenses), the transactions recorded by
//! transfers between them, and the money and id types they are built from.

pub mod ids;
pub mod item;
pub mod money;
pub mod transaction;

pub use ids::{ItemId, TransactionId};
pub use item::{ItemKind, LedgerItem, NewItem};
pub use money::{Money, MoneyParseError};
pub use transaction::Transaction;

//! Storage layer for budget-ledger
//!
//! A local database made of four record collections (incomes, accounts,
//! expenses, transactions) and a settings collection, each persisted as a
//! JSON file with atomic writes.
//!
//! One [`Storage`] value is built at startup and handed by reference to the
//! services; there are no global store instances.

pub mod collection;
pub mod file_io;
pub mod sequence;
pub mod settings;

pub use collection::{Collection, Record};
pub use file_io::{read_json, write_json_atomic};
pub use sequence::IdSequence;
pub use settings::SettingsStore;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::{ItemId, ItemKind, LedgerItem, Transaction, TransactionId};

/// Main storage coordinator that provides access to all collections
pub struct Storage {
    paths: BudgetPaths,
    ids: IdSequence,
    pub incomes: Collection<LedgerItem>,
    pub accounts: Collection<LedgerItem>,
    pub expenses: Collection<LedgerItem>,
    pub transactions: Collection<Transaction>,
    pub settings: SettingsStore,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        let items = |kind: ItemKind| {
            Collection::new(kind.collection(), paths.collection_file(kind.collection()))
        };

        Ok(Self {
            incomes: items(ItemKind::Income),
            accounts: items(ItemKind::Account),
            expenses: items(ItemKind::Expense),
            transactions: Collection::new("transactions", paths.collection_file("transactions")),
            settings: SettingsStore::new(paths.settings_file()),
            ids: IdSequence::new(),
            paths,
        })
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    /// Load all data from disk and seed the id sequence past every stored id
    pub fn load_all(&self) -> Result<(), BudgetError> {
        self.incomes.load()?;
        self.accounts.load()?;
        self.expenses.load()?;
        self.transactions.load()?;
        self.settings.load()?;

        let max_ids = [
            self.incomes.max_raw_id()?,
            self.accounts.max_raw_id()?,
            self.expenses.max_raw_id()?,
            self.transactions.max_raw_id()?,
        ];
        for raw in max_ids.into_iter().flatten() {
            self.ids.observe(raw);
        }

        Ok(())
    }

    /// The collection holding items of `kind`
    pub fn items(&self, kind: ItemKind) -> &Collection<LedgerItem> {
        match kind {
            ItemKind::Income => &self.incomes,
            ItemKind::Account => &self.accounts,
            ItemKind::Expense => &self.expenses,
        }
    }

    pub fn next_item_id(&self) -> ItemId {
        ItemId::from_raw(self.ids.next())
    }

    pub fn next_transaction_id(&self) -> TransactionId {
        TransactionId::from_raw(self.ids.next())
    }
}

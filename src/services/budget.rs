//! Budget service
//!
//! Keeps an in-memory mirror of the four ledger collections and applies every
//! change to storage first, then to the mirror. Transfers and their reverts
//! touch three records; if a later write fails, the writes already made are
//! undone by restoring the previous records, and the original error is
//! returned.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ItemId, ItemKind, LedgerItem, Money, NewItem, Transaction, TransactionId};
use crate::storage::Storage;

/// In-memory view of the ledger with mutation operations
pub struct BudgetService<'a> {
    storage: &'a Storage,
    incomes: Vec<LedgerItem>,
    accounts: Vec<LedgerItem>,
    expenses: Vec<LedgerItem>,
    transactions: Vec<Transaction>,
}

/// Totals shown on the stats view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetSummary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub income_count: usize,
    pub account_count: usize,
    pub expense_count: usize,
    pub transaction_count: usize,
}

impl<'a> BudgetService<'a> {
    /// Create a service with an empty mirror; call [`init`](Self::init) to load
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            incomes: Vec::new(),
            accounts: Vec::new(),
            expenses: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// Replace the mirror with the contents of storage
    ///
    /// An item's `type` always follows the collection it was loaded from; a
    /// record tagged otherwise is corrected in memory and rewritten with the
    /// right tag on its next update.
    pub fn init(&mut self) -> BudgetResult<()> {
        self.incomes = self.load_items(ItemKind::Income)?;
        self.accounts = self.load_items(ItemKind::Account)?;
        self.expenses = self.load_items(ItemKind::Expense)?;
        self.transactions = self.storage.transactions.get_all()?;
        Ok(())
    }

    fn load_items(&self, kind: ItemKind) -> BudgetResult<Vec<LedgerItem>> {
        let mut items = self.storage.items(kind).get_all()?;

        for item in items.iter_mut().filter(|i| i.kind != kind) {
            tracing::warn!(
                id = %item.id,
                tagged = item.kind.as_str(),
                collection = kind.collection(),
                "item type does not match its collection"
            );
            item.kind = kind;
        }

        Ok(items)
    }

    pub fn incomes(&self) -> &[LedgerItem] {
        &self.incomes
    }

    pub fn accounts(&self) -> &[LedgerItem] {
        &self.accounts
    }

    pub fn expenses(&self) -> &[LedgerItem] {
        &self.expenses
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn items(&self, kind: ItemKind) -> &[LedgerItem] {
        match kind {
            ItemKind::Income => &self.incomes,
            ItemKind::Account => &self.accounts,
            ItemKind::Expense => &self.expenses,
        }
    }

    fn items_mut(&mut self, kind: ItemKind) -> &mut Vec<LedgerItem> {
        match kind {
            ItemKind::Income => &mut self.incomes,
            ItemKind::Account => &mut self.accounts,
            ItemKind::Expense => &mut self.expenses,
        }
    }

    /// Sum of amounts over accounts that are included in the balance
    pub fn balance(&self) -> Money {
        self.accounts
            .iter()
            .filter(|a| a.include_in_balance)
            .map(|a| a.amount)
            .sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.expenses.iter().map(|e| e.amount).sum()
    }

    pub fn total_income(&self) -> Money {
        self.incomes.iter().map(|i| i.amount).sum()
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            total_income: self.total_income(),
            total_expenses: self.total_expenses(),
            balance: self.balance(),
            income_count: self.incomes.len(),
            account_count: self.accounts.len(),
            expense_count: self.expenses.len(),
            transaction_count: self.transactions.len(),
        }
    }

    /// Which collection holds the item with this id (incomes, then accounts,
    /// then expenses)
    pub fn item_kind(&self, id: ItemId) -> Option<ItemKind> {
        ItemKind::ALL
            .into_iter()
            .find(|kind| self.items(*kind).iter().any(|i| i.id == id))
    }

    /// First item with this exact name, searching incomes, then accounts,
    /// then expenses, along with the collection it was found in
    pub fn find_by_name(&self, name: &str) -> Option<(ItemKind, &LedgerItem)> {
        ItemKind::ALL.into_iter().find_map(|kind| {
            self.items(kind)
                .iter()
                .find(|i| i.name == name)
                .map(|item| (kind, item))
        })
    }

    /// Find an item by name or id string
    pub fn find(&self, identifier: &str) -> Option<&LedgerItem> {
        if let Some((_, item)) = self.find_by_name(identifier) {
            return Some(item);
        }

        let id = identifier.parse::<ItemId>().ok()?;
        ItemKind::ALL
            .into_iter()
            .find_map(|kind| self.items(kind).iter().find(|i| i.id == id))
    }

    /// Find a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    pub fn add_income(&mut self, income: NewItem) -> BudgetResult<LedgerItem> {
        self.add(ItemKind::Income, income)
    }

    pub fn add_account(&mut self, account: NewItem) -> BudgetResult<LedgerItem> {
        self.add(ItemKind::Account, account)
    }

    pub fn add_expense(&mut self, expense: NewItem) -> BudgetResult<LedgerItem> {
        self.add(ItemKind::Expense, expense)
    }

    fn add(&mut self, kind: ItemKind, new_item: NewItem) -> BudgetResult<LedgerItem> {
        let item = new_item.into_item(self.storage.next_item_id(), kind);

        self.storage.items(kind).add(item.clone())?;
        self.items_mut(kind).push(item.clone());

        tracing::info!(id = %item.id, kind = kind.as_str(), name = %item.name, "added item");
        Ok(item)
    }

    /// Store `item` as the full replacement for the record with its id
    ///
    /// The stored `type` is set to `kind`. If the mirror holds no item with
    /// that id it is left unchanged.
    pub fn update_item(&mut self, kind: ItemKind, mut item: LedgerItem) -> BudgetResult<()> {
        item.kind = kind;
        self.storage.items(kind).put(item.clone())?;

        if let Some(existing) = self.items_mut(kind).iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        }

        Ok(())
    }

    pub fn delete_item(&mut self, kind: ItemKind, id: ItemId) -> BudgetResult<()> {
        self.storage.items(kind).remove(id)?;
        self.items_mut(kind).retain(|i| i.id != id);

        tracing::info!(%id, kind = kind.as_str(), "deleted item");
        Ok(())
    }

    /// Move `amount` from one item to another and record the transaction
    ///
    /// Returns `Ok(None)` without touching anything when either endpoint is
    /// not in the ledger. The new amounts are computed from the records as
    /// passed in.
    ///
    /// # Errors
    ///
    /// A transfer from an item to itself is rejected with
    /// [`BudgetError::Validation`] before anything is written.
    pub fn transfer(
        &mut self,
        from: &LedgerItem,
        to: &LedgerItem,
        amount: Money,
    ) -> BudgetResult<Option<Transaction>> {
        let (Some((from_kind, from_before)), Some((to_kind, to_before))) =
            (self.locate(from.id), self.locate(to.id))
        else {
            tracing::debug!(from = %from.id, to = %to.id, "transfer endpoint not in ledger");
            return Ok(None);
        };

        if from.id == to.id {
            return Err(BudgetError::Validation(
                "Cannot transfer an item to itself".into(),
            ));
        }

        self.update_item(from_kind, from.with_amount(from.amount - amount))?;

        if let Err(e) = self.update_item(to_kind, to.with_amount(to.amount + amount)) {
            self.compensate(vec![(from_kind, from_before)]);
            return Err(e);
        }

        let transaction = Transaction::new(
            self.storage.next_transaction_id(),
            from.name.clone(),
            to.name.clone(),
            amount,
        );
        if let Err(e) = self.storage.transactions.add(transaction.clone()) {
            self.compensate(vec![(to_kind, to_before), (from_kind, from_before)]);
            return Err(e);
        }
        self.transactions.push(transaction.clone());

        tracing::info!(
            id = %transaction.id,
            from = %transaction.from,
            to = %transaction.to,
            amount = %transaction.amount,
            "recorded transfer"
        );
        Ok(Some(transaction))
    }

    /// Undo a transfer and delete its transaction
    ///
    /// Endpoints are resolved by name. Returns `Ok(false)` and logs an error
    /// when either name no longer matches an item.
    pub fn revert_transaction(&mut self, transaction: &Transaction) -> BudgetResult<bool> {
        let resolve =
            |name: &str| self.find_by_name(name).map(|(kind, item)| (kind, item.clone()));
        let (Some((from_kind, from_item)), Some((to_kind, to_item))) =
            (resolve(&transaction.from), resolve(&transaction.to))
        else {
            tracing::error!(
                id = %transaction.id,
                from = %transaction.from,
                to = %transaction.to,
                "could not find items for transaction"
            );
            return Ok(false);
        };

        self.update_item(
            from_kind,
            from_item.with_amount(from_item.amount + transaction.amount),
        )?;

        if let Err(e) = self.update_item(
            to_kind,
            to_item.with_amount(to_item.amount - transaction.amount),
        ) {
            self.compensate(vec![(from_kind, from_item)]);
            return Err(e);
        }

        if let Err(e) = self.storage.transactions.remove(transaction.id) {
            self.compensate(vec![(to_kind, to_item), (from_kind, from_item)]);
            return Err(e);
        }
        self.transactions.retain(|t| t.id != transaction.id);

        tracing::info!(id = %transaction.id, "reverted transfer");
        Ok(true)
    }

    /// Collection and current record for an item id
    fn locate(&self, id: ItemId) -> Option<(ItemKind, LedgerItem)> {
        let kind = self.item_kind(id)?;
        let item = self.items(kind).iter().find(|i| i.id == id)?.clone();
        Some((kind, item))
    }

    /// Put back earlier records after a failed multi-step write
    fn compensate(&mut self, restore: Vec<(ItemKind, LedgerItem)>) {
        for (kind, item) in restore {
            let id = item.id;
            if let Err(e) = self.update_item(kind, item) {
                tracing::error!(%id, error = %e, "failed to restore item after aborted write");
            }
        }
    }
}

//! CLI command handlers for transfers and reverts

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, TransactionId};
use crate::services::BudgetService;

/// Handle the transfer command
pub fn handle_transfer_command(
    budget: &mut BudgetService,
    symbol: &str,
    from: &str,
    to: &str,
    amount: &str,
) -> BudgetResult<()> {
    let from_item = budget
        .find(from)
        .cloned()
        .ok_or_else(|| BudgetError::item_not_found(from))?;

    let to_item = budget
        .find(to)
        .cloned()
        .ok_or_else(|| BudgetError::item_not_found(to))?;

    let amount = Money::parse(amount).map_err(|e| {
        BudgetError::Validation(format!(
            "Invalid amount format: '{}'. Use format like '100.00' or '100'. Error: {}",
            amount, e
        ))
    })?;

    if !amount.is_positive() {
        return Err(BudgetError::Validation(
            "Transfer amount must be positive".into(),
        ));
    }

    match budget.transfer(&from_item, &to_item, amount)? {
        Some(txn) => {
            println!("Transfer recorded:");
            println!("  From:   {}", txn.from);
            println!("  To:     {}", txn.to);
            println!("  Amount: {}", txn.amount.format_with_symbol(symbol));
            println!("  ID:     {}", txn.id);
        }
        None => println!("Nothing transferred."),
    }

    Ok(())
}

/// Handle the revert command
pub fn handle_revert_command(budget: &mut BudgetService, transaction: &str) -> BudgetResult<()> {
    let id = transaction.parse::<TransactionId>().map_err(|_| {
        BudgetError::Validation(format!("Invalid transaction ID: '{}'", transaction))
    })?;

    let txn = budget
        .transaction(id)
        .cloned()
        .ok_or_else(|| BudgetError::transaction_not_found(transaction))?;

    if budget.revert_transaction(&txn)? {
        println!("Reverted transfer {} -> {} ({})", txn.from, txn.to, txn.id);
        Ok(())
    } else {
        Err(BudgetError::Validation(format!(
            "Cannot revert {}: '{}' or '{}' no longer exists",
            txn.id, txn.from, txn.to
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BudgetPaths;
    use crate::models::NewItem;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_transfer_and_revert() {
        let (_temp_dir, storage) = create_test_storage();
        let mut budget = BudgetService::new(&storage);
        budget
            .add_account(NewItem::new("A", "100").include_in_balance(true))
            .unwrap();
        budget.add_expense(NewItem::new("B", "0")).unwrap();

        handle_transfer_command(&mut budget, "$", "A", "B", "30").unwrap();
        assert_eq!(budget.accounts()[0].amount, Money::from_units(70.0));

        let id = budget.transactions()[0].id.to_string();
        handle_revert_command(&mut budget, &id).unwrap();
        assert_eq!(budget.accounts()[0].amount, Money::from_units(100.0));
        assert!(budget.transactions().is_empty());
    }

    #[test]
    fn test_transfer_rejects_bad_amounts() {
        let (_temp_dir, storage) = create_test_storage();
        let mut budget = BudgetService::new(&storage);
        budget.add_account(NewItem::new("A", "100")).unwrap();
        budget.add_account(NewItem::new("B", "0")).unwrap();

        assert!(handle_transfer_command(&mut budget, "$", "A", "B", "abc")
            .unwrap_err()
            .is_validation());
        assert!(handle_transfer_command(&mut budget, "$", "A", "B", "0")
            .unwrap_err()
            .is_validation());
        assert!(
            handle_transfer_command(&mut budget, "$", "A", "B", "100000000000000000")
                .unwrap_err()
                .is_validation()
        );
        assert!(handle_transfer_command(&mut budget, "$", "A", "Nowhere", "5")
            .unwrap_err()
            .is_not_found());
        assert!(budget.transactions().is_empty());
    }

    #[test]
    fn test_revert_after_rename_fails() {
        let (_temp_dir, storage) = create_test_storage();
        let mut budget = BudgetService::new(&storage);
        budget.add_account(NewItem::new("A", "100")).unwrap();
        budget.add_account(NewItem::new("B", "0")).unwrap();
        handle_transfer_command(&mut budget, "$", "A", "B", "10").unwrap();

        let mut renamed = budget.accounts()[1].clone();
        renamed.name = "C".into();
        budget
            .update_item(crate::models::ItemKind::Account, renamed)
            .unwrap();

        let id = budget.transactions()[0].id.to_string();
        assert!(handle_revert_command(&mut budget, &id).unwrap_err().is_validation());
        assert_eq!(budget.transactions().len(), 1);
    }
}

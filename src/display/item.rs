//! Ledger item display formatting
//!
//! Formats incomes, accounts and expenses for terminal output in table and
//! detail views.

use crate::models::{ItemKind, LedgerItem, Money};

use super::report::format_title;

/// Format a list of items as a table with a total row
pub fn format_item_list(items: &[LedgerItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No items found.\n".to_string();
    }

    let name_width = items
        .iter()
        .map(|i| i.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {:>14}  {:<10}  {}\n",
        "Name",
        "Type",
        "Amount",
        "In Balance",
        "ID",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<8}  {:->14}  {:-<10}  {:-<18}\n",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for item in items {
        let in_balance = match (item.kind, item.include_in_balance) {
            (ItemKind::Account, true) => "Yes",
            (ItemKind::Account, false) => "No",
            _ => "",
        };

        output.push_str(&format!(
            "{:<name_width$}  {:<8}  {:>14}  {:<10}  {}\n",
            item.name,
            item.kind.as_str(),
            item.amount.format_with_symbol(symbol),
            in_balance,
            item.id,
            name_width = name_width,
        ));
    }

    let total: Money = items.iter().map(|i| i.amount).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:<8}  {:>14}\n",
        "TOTAL",
        "",
        total.format_with_symbol(symbol),
        name_width = name_width,
    ));

    output
}

/// Format a single item's details, including any extra stored fields
pub fn format_item_details(item: &LedgerItem, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", item.kind, item.name));
    output.push_str(&format!("  ID:         {}\n", item.id));
    output.push_str(&format!(
        "  Amount:     {}\n",
        item.amount.format_with_symbol(symbol)
    ));
    if item.kind == ItemKind::Account {
        output.push_str(&format!(
            "  In Balance: {}\n",
            if item.include_in_balance { "Yes" } else { "No" }
        ));
    }

    for (key, value) in &item.fields {
        output.push_str(&format!("  {}: {}\n", key, value));
    }

    output
}

/// The Home view: balance, then each collection in turn
pub fn format_home(
    incomes: &[LedgerItem],
    accounts: &[LedgerItem],
    expenses: &[LedgerItem],
    balance: Money,
    symbol: &str,
) -> String {
    let mut output = format_title("Budget");
    output.push_str(&format!("Balance: {}\n", balance.format_with_symbol(symbol)));

    for (title, items) in [
        ("Incomes", incomes),
        ("Accounts", accounts),
        ("Expenses", expenses),
    ] {
        output.push('\n');
        output.push_str(&format!("{}\n", title));
        output.push_str(&format_item_list(items, symbol));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, NewItem};
    use serde_json::json;

    fn item(id: i64, name: &str, amount: &str, kind: ItemKind) -> LedgerItem {
        NewItem::new(name, amount)
            .include_in_balance(kind == ItemKind::Account)
            .into_item(ItemId::from_raw(id), kind)
    }

    #[test]
    fn test_format_item_list() {
        let items = vec![
            item(1, "Checking", "1000", ItemKind::Account),
            item(2, "Savings", "5000.5", ItemKind::Account),
        ];

        let output = format_item_list(&items, "€");
        assert!(output.contains("Checking"));
        assert!(output.contains("€5000.50"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("€6000.50"));
        assert!(output.contains("item-2"));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_item_list(&[], "$"), "No items found.\n");
    }

    #[test]
    fn test_format_item_details() {
        let mut rent = item(3, "Rent", "850", ItemKind::Expense);
        rent.fields.insert("category".into(), json!("housing"));

        let output = format_item_details(&rent, "$");
        assert!(output.contains("Expense: Rent"));
        assert!(output.contains("$850.00"));
        assert!(output.contains("category: \"housing\""));
        assert!(!output.contains("In Balance"));
    }

    #[test]
    fn test_format_home() {
        let accounts = vec![item(1, "Wallet", "70", ItemKind::Account)];
        let output = format_home(&[], &accounts, &[], Money::from_units(70.0), "$");

        assert!(output.starts_with("Budget\n======\n"));
        assert!(output.contains("Balance: $70.00"));
        assert!(output.contains("Incomes\nNo items found."));
        assert!(output.contains("Wallet"));
    }
}

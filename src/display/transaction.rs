//! Transaction display formatting
//!
//! Renders the History view.

use crate::models::Transaction;

use super::report::truncate;

/// Format a single transaction for display (history row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:<22} {:16} {:20} {:20} {:>12}",
        txn.id,
        txn.date.format("%Y-%m-%d %H:%M"),
        truncate(&txn.from, 20),
        truncate(&txn.to, 20),
        txn.amount.format_with_symbol(symbol)
    )
}

/// Transactions sorted newest first; ties keep the later id first
pub fn newest_first(transactions: &[Transaction]) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted
}

/// Format the transaction history, newest first
pub fn format_history(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<22} {:16} {:20} {:20} {:>12}\n",
        "ID", "Date", "From", "To", "Amount"
    ));
    output.push_str(&"-".repeat(94));
    output.push('\n');

    for txn in newest_first(transactions) {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionId};
    use chrono::{TimeZone, Utc};

    fn txn(id: i64, day: u32, from: &str, to: &str, cents: i64) -> Transaction {
        let mut t = Transaction::new(TransactionId::from_raw(id), from, to, Money::from_cents(cents));
        t.date = Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap();
        t
    }

    #[test]
    fn test_history_is_newest_first() {
        let transactions = vec![
            txn(1, 1, "Wallet", "Rent", 3000),
            txn(2, 5, "Salary", "Wallet", 100000),
            txn(3, 3, "Wallet", "Food", 1250),
        ];

        let ids: Vec<i64> = newest_first(&transactions).iter().map(|t| t.id.raw()).collect();
        assert_eq!(ids, vec![2, 3, 1]);

        let output = format_history(&transactions, "£");
        let salary = output.find("Salary").unwrap();
        let rent = output.find("Rent").unwrap();
        assert!(salary < rent);
        assert!(output.contains("£1000.00"));
        assert!(output.contains("2024-03-03 12:00"));
    }

    #[test]
    fn test_same_date_orders_by_id() {
        let transactions = vec![txn(10, 1, "A", "B", 1), txn(11, 1, "B", "A", 1)];
        let ids: Vec<i64> = newest_first(&transactions).iter().map(|t| t.id.raw()).collect();
        assert_eq!(ids, vec![11, 10]);
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(format_history(&[], "$"), "No transactions found.\n");
    }
}

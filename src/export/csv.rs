//! CSV export
//!
//! Writes the transaction history, one row per transfer.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::storage::Storage;

#[derive(Serialize)]
struct TransactionRow<'a> {
    id: i64,
    date: String,
    from: &'a str,
    to: &'a str,
    amount: String,
}

/// Export all transactions to CSV, oldest first
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> BudgetResult<usize> {
    let transactions = storage.transactions.get_all()?;
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer
            .write_record(["id", "date", "from", "to", "amount"])
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    for txn in &transactions {
        csv_writer
            .serialize(TransactionRow {
                id: txn.id.raw(),
                date: txn.date.to_rfc3339(),
                from: &txn.from,
                to: &txn.to,
                amount: txn.amount.to_string(),
            })
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

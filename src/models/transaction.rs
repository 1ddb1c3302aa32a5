//! Transaction model
//!
//! A transaction records one transfer between two ledger items. Endpoints are
//! stored by item *name* as it was when the transfer happened; renaming an
//! item afterwards leaves older transactions pointing at the old name.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// Name of the debited item
    pub from: String,

    /// Name of the credited item
    pub to: String,

    pub amount: Money,

    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction dated now
    pub fn new(
        id: TransactionId,
        from: impl Into<String>,
        to: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id,
            from: from.into(),
            to: to.into(),
            amount,
            date: Utc::now(),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_display() {
        let txn = Transaction::new(TransactionId::from_raw(1), "Checking", "Savings", Money::from_cents(3000));
        assert_eq!(txn.to_string(), "Checking -> Savings: 30.00");
    }

    #[test]
    fn test_date_is_iso_8601() {
        let mut txn = Transaction::new(TransactionId::from_raw(1), "A", "B", Money::from_cents(150));
        txn.date = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "from": "A",
                "to": "B",
                "amount": 1.5,
                "date": "2024-03-01T12:30:00Z"
            })
        );
    }

    #[test]
    fn test_reads_millisecond_timestamps() {
        let txn: Transaction = serde_json::from_value(json!({
            "id": 1700000000000_i64,
            "from": "Salary",
            "to": "Checking",
            "amount": 30,
            "date": "2023-11-14T22:13:20.000Z"
        }))
        .unwrap();

        assert_eq!(txn.amount.cents(), 3000);
        assert_eq!(txn.date.timestamp(), 1_700_000_000);
    }
}

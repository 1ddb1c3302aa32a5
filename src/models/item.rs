//! Ledger item model
//!
//! Incomes, accounts and expenses share one flat record shape and differ only
//! in the collection they live in. The `type` tag mirrors that membership.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;

/// Which of the three disjoint collections an item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Income,
    Account,
    Expense,
}

impl ItemKind {
    /// All kinds, in the order collections are searched when resolving an
    /// item by id or by name
    pub const ALL: [ItemKind; 3] = [ItemKind::Income, ItemKind::Account, ItemKind::Expense];

    /// Name of the collection this kind is stored in
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Income => "incomes",
            Self::Account => "accounts",
            Self::Expense => "expenses",
        }
    }

    /// The value of the `type` tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Account => "account",
            Self::Expense => "expense",
        }
    }

    /// Parse a kind from its tag or its collection name
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Some(Self::Income),
            "account" | "accounts" => Some(Self::Account),
            "expense" | "expenses" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Account => write!(f, "Account"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// An income, account or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerItem {
    pub id: ItemId,

    /// Display name. Transactions refer to items by this name.
    pub name: String,

    /// Held in whole cents; finer fractions in stored data (`0.005`) are
    /// rounded when loaded and saved back rounded
    pub amount: Money,

    #[serde(rename = "type")]
    pub kind: ItemKind,

    /// Whether an account counts toward the overall balance
    #[serde(default)]
    pub include_in_balance: bool,

    /// Any other fields the record carries, preserved as-is
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl LedgerItem {
    /// A copy of this item with a different amount
    pub fn with_amount(&self, amount: Money) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}

impl fmt::Display for LedgerItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

/// User input for creating an item
///
/// `amount` is the raw text as entered; it is coerced to a number when the
/// item is added, never rejected.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub amount: String,
    pub include_in_balance: bool,
    pub fields: Map<String, Value>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            ..Self::default()
        }
    }

    /// Set whether the item counts toward the balance
    pub fn include_in_balance(mut self, include: bool) -> Self {
        self.include_in_balance = include;
        self
    }

    /// Attach an extra domain field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Build the stored record
    pub fn into_item(self, id: ItemId, kind: ItemKind) -> LedgerItem {
        LedgerItem {
            id,
            name: self.name,
            amount: Money::coerce(&self.amount),
            kind,
            include_in_balance: self.include_in_balance,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_parsing() {
        assert_eq!(ItemKind::parse("income"), Some(ItemKind::Income));
        assert_eq!(ItemKind::parse("Accounts"), Some(ItemKind::Account));
        assert_eq!(ItemKind::parse("EXPENSE"), Some(ItemKind::Expense));
        assert_eq!(ItemKind::parse("savings"), None);
    }

    #[test]
    fn test_new_item_coerces_amount() {
        let item = NewItem::new("Lunch", "12.5").into_item(ItemId::from_raw(1), ItemKind::Expense);
        assert_eq!(item.amount, Money::from_cents(1250));
        assert_eq!(item.kind, ItemKind::Expense);

        let item = NewItem::new("Lunch", "abc").into_item(ItemId::from_raw(2), ItemKind::Expense);
        assert_eq!(item.amount, Money::zero());
    }

    #[test]
    fn test_serialized_shape() {
        let item = NewItem::new("Checking", "100")
            .include_in_balance(true)
            .with_field("color", json!("blue"))
            .into_item(ItemId::from_raw(5), ItemKind::Account);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 5,
                "name": "Checking",
                "amount": 100,
                "type": "account",
                "includeInBalance": true,
                "color": "blue"
            })
        );

        let back: LedgerItem = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_missing_include_in_balance_defaults_false() {
        let item: LedgerItem = serde_json::from_value(json!({
            "id": 9,
            "name": "Salary",
            "amount": 2500.75,
            "type": "income"
        }))
        .unwrap();

        assert!(!item.include_in_balance);
        assert_eq!(item.amount.cents(), 250_075);
        assert!(item.fields.is_empty());
    }

    #[test]
    fn test_with_amount_keeps_identity() {
        let item = NewItem::new("Cash", "10").into_item(ItemId::from_raw(3), ItemKind::Account);
        let moved = item.with_amount(Money::from_cents(700));
        assert_eq!(moved.id, item.id);
        assert_eq!(moved.name, item.name);
        assert_eq!(moved.amount.cents(), 700);
    }
}

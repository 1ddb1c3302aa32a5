//! Stats view formatting

use crate::models::LedgerItem;
use crate::services::BudgetSummary;

use super::report::{format_bar, format_percentage, format_title, truncate};

const BAR_WIDTH: usize = 20;

/// Format totals, item counts and the share of each expense
pub fn format_stats(summary: &BudgetSummary, expenses: &[LedgerItem], symbol: &str) -> String {
    let mut output = format_title("Stats");

    output.push_str(&format!(
        "Total income:   {:>14}\n",
        summary.total_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total expenses: {:>14}\n",
        summary.total_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:        {:>14}\n",
        summary.balance.format_with_symbol(symbol)
    ));
    output.push('\n');
    output.push_str(&format!(
        "Incomes: {}  Accounts: {}  Expenses: {}  Transactions: {}\n",
        summary.income_count,
        summary.account_count,
        summary.expense_count,
        summary.transaction_count
    ));

    let total = summary.total_expenses.as_units();
    if total > 0.0 && !expenses.is_empty() {
        output.push('\n');
        output.push_str("Expenses by share\n");

        let mut sorted: Vec<&LedgerItem> = expenses.iter().collect();
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));

        for expense in sorted {
            let value = expense.amount.as_units();
            output.push_str(&format!(
                "  {:20} {:>12} {} {}\n",
                truncate(&expense.name, 20),
                expense.amount.format_with_symbol(symbol),
                format_bar(value, total, BAR_WIDTH),
                format_percentage(value / total * 100.0)
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, ItemKind, Money, NewItem};

    fn expense(id: i64, name: &str, amount: &str) -> LedgerItem {
        NewItem::new(name, amount).into_item(ItemId::from_raw(id), ItemKind::Expense)
    }

    fn summary(expenses: Money) -> BudgetSummary {
        BudgetSummary {
            total_income: Money::from_units(2500.0),
            total_expenses: expenses,
            balance: Money::from_units(100.0),
            income_count: 1,
            account_count: 2,
            expense_count: 2,
            transaction_count: 3,
        }
    }

    #[test]
    fn test_format_stats() {
        let expenses = vec![expense(1, "Food", "25"), expense(2, "Rent", "75")];
        let output = format_stats(&summary(Money::from_units(100.0)), &expenses, "$");

        assert!(output.contains("Total income:"));
        assert!(output.contains("$2500.00"));
        assert!(output.contains("Total expenses:"));
        assert!(output.contains("Transactions: 3"));
        assert!(output.contains("75%"));
        assert!(output.find("Rent").unwrap() < output.find("Food").unwrap());
    }

    #[test]
    fn test_no_breakdown_without_expenses() {
        let output = format_stats(&summary(Money::zero()), &[], "$");
        assert!(!output.contains("Expenses by share"));
    }
}

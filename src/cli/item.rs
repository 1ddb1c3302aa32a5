//! Ledger item CLI commands
//!
//! Implements CLI commands for incomes, accounts and expenses.

use clap::Subcommand;

use crate::display::item::{format_item_details, format_item_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{ItemId, ItemKind, LedgerItem, Money, NewItem};
use crate::services::BudgetService;

/// Item subcommands
#[derive(Subcommand, Debug)]
pub enum ItemCommands {
    /// Add an income, account or expense
    Add {
        /// Item type (income, account, expense)
        kind: String,
        /// Item name
        name: String,
        /// Amount (e.g. "12.50"); text that is not a number counts as 0
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Leave this item out of the overall balance
        #[arg(long)]
        exclude_from_balance: bool,
    },
    /// List items, optionally of one type
    List {
        /// Item type (income, account, expense)
        kind: Option<String>,
    },
    /// Show item details
    Show {
        /// Item name or ID
        item: String,
    },
    /// Edit an item
    Edit {
        /// Item type (income, account, expense)
        kind: String,
        /// Item name or ID
        item: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Whether the item counts toward the balance
        #[arg(long)]
        include_in_balance: Option<bool>,
    },
    /// Delete an item
    Delete {
        /// Item type (income, account, expense)
        kind: String,
        /// Item name or ID
        item: String,
    },
}

/// Handle an item command
pub fn handle_item_command(
    budget: &mut BudgetService,
    symbol: &str,
    cmd: ItemCommands,
) -> BudgetResult<()> {
    match cmd {
        ItemCommands::Add {
            kind,
            name,
            amount,
            exclude_from_balance,
        } => {
            let kind = parse_kind(&kind)?;
            let new_item = NewItem::new(name, amount).include_in_balance(!exclude_from_balance);

            let item = match kind {
                ItemKind::Income => budget.add_income(new_item)?,
                ItemKind::Account => budget.add_account(new_item)?,
                ItemKind::Expense => budget.add_expense(new_item)?,
            };

            println!(
                "Added {} '{}' ({})",
                item.kind.as_str(),
                item.name,
                item.amount.format_with_symbol(symbol)
            );
            println!("  ID: {}", item.id);
        }

        ItemCommands::List { kind } => match kind {
            Some(kind) => {
                let kind = parse_kind(&kind)?;
                print!("{}", format_item_list(budget.items(kind), symbol));
            }
            None => {
                for kind in ItemKind::ALL {
                    println!("{}s", kind);
                    print!("{}", format_item_list(budget.items(kind), symbol));
                    println!();
                }
            }
        },

        ItemCommands::Show { item } => {
            let found = budget
                .find(&item)
                .ok_or_else(|| BudgetError::item_not_found(&item))?;
            print!("{}", format_item_details(found, symbol));
        }

        ItemCommands::Edit {
            kind,
            item,
            name,
            amount,
            include_in_balance,
        } => {
            let kind = parse_kind(&kind)?;
            let mut updated = resolve_item(budget, kind, &item)?;

            if name.is_none() && amount.is_none() && include_in_balance.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            if let Some(name) = name {
                updated.name = name;
            }
            if let Some(amount) = amount {
                updated.amount = Money::coerce(&amount);
            }
            if let Some(include) = include_in_balance {
                updated.include_in_balance = include;
            }

            budget.update_item(kind, updated.clone())?;
            println!("Updated {} '{}'", kind.as_str(), updated.name);
        }

        ItemCommands::Delete { kind, item } => {
            let kind = parse_kind(&kind)?;
            let target = resolve_item(budget, kind, &item)?;

            budget.delete_item(kind, target.id)?;
            println!("Deleted {} '{}'", kind.as_str(), target.name);
        }
    }

    Ok(())
}

/// Parse an item type given on the command line
pub fn parse_kind(s: &str) -> BudgetResult<ItemKind> {
    ItemKind::parse(s).ok_or_else(|| {
        BudgetError::Validation(format!(
            "Unknown item type: '{}'. Use income, account or expense",
            s
        ))
    })
}

/// Find an item of one type by name, then by ID
fn resolve_item(budget: &BudgetService, kind: ItemKind, identifier: &str) -> BudgetResult<LedgerItem> {
    let items = budget.items(kind);

    items
        .iter()
        .find(|i| i.name == identifier)
        .or_else(|| {
            let id = identifier.parse::<ItemId>().ok()?;
            items.iter().find(|i| i.id == id)
        })
        .cloned()
        .ok_or_else(|| BudgetError::item_not_found(identifier))
}

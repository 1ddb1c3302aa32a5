//! Routed views
//!
//! `budget open <path>` renders the view a route points at.

use crate::display::{format_history, format_home, format_stats};
use crate::display::report::format_title;
use crate::error::{BudgetError, BudgetResult};
use crate::export::FullExport;
use crate::routes::{Route, ROUTES};
use crate::services::{BudgetService, SettingsService};
use crate::storage::Storage;

/// Render the text of a view
pub fn render_route(
    route: Route,
    storage: &Storage,
    budget: &BudgetService,
    settings: &SettingsService,
) -> BudgetResult<String> {
    let symbol = settings.currency_symbol();

    let output = match route {
        Route::Home => format_home(
            budget.incomes(),
            budget.accounts(),
            budget.expenses(),
            budget.balance(),
            symbol,
        ),
        Route::Stats => format_stats(&budget.summary(), budget.expenses(), symbol),
        Route::History => {
            let mut output = format_title("History");
            output.push_str(&format_history(budget.transactions(), symbol));
            output
        }
        Route::ExportData => {
            let export = FullExport::from_storage(storage)?;
            let mut output = format_title("Export Data");
            output.push_str(&format!("Incomes:      {}\n", export.incomes.len()));
            output.push_str(&format!("Accounts:     {}\n", export.accounts.len()));
            output.push_str(&format!("Expenses:     {}\n", export.expenses.len()));
            output.push_str(&format!("Transactions: {}\n", export.transactions.len()));
            output.push('\n');
            output.push_str("Formats: json, yaml (full snapshot), csv (transactions)\n");
            output.push_str("Run 'budget export --format <FORMAT> --output <FILE>' to export.\n");
            output
        }
        Route::Settings => {
            let mut output = format_title("Settings");
            output.push_str(&format!("Currency symbol: {}\n", symbol));
            output.push_str(&format!(
                "Data directory:  {}\n",
                storage.paths().data_dir().display()
            ));
            output
        }
    };

    Ok(output)
}

/// Handle `budget open <path>`
pub fn handle_open_command(
    path: &str,
    storage: &Storage,
    budget: &BudgetService,
    settings: &SettingsService,
) -> BudgetResult<()> {
    let route = Route::from_path(path).ok_or_else(|| BudgetError::route_not_found(path))?;
    tracing::debug!(%route, "opening view");

    print!("{}", render_route(route, storage, budget, settings)?);
    Ok(())
}

/// Format the route table
pub fn format_route_table() -> String {
    let mut output = String::new();
    for entry in ROUTES {
        output.push_str(&format!("{:<10} {}\n", entry.path, entry.name));
    }
    output
}

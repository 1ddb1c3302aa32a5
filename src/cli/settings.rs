//! Settings CLI commands

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::services::SettingsService;

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show or change the currency symbol
    Currency {
        /// New symbol; omit to show the current one
        symbol: Option<String>,
    },
}

/// Handle a settings command
pub fn handle_settings_command(
    settings: &mut SettingsService,
    cmd: SettingsCommands,
) -> BudgetResult<()> {
    match cmd {
        SettingsCommands::Currency { symbol: None } => {
            println!("{}", settings.currency_symbol());
        }
        SettingsCommands::Currency {
            symbol: Some(symbol),
        } => {
            settings.set_currency_symbol(symbol)?;
            println!("Currency symbol set to: {}", settings.currency_symbol());
        }
    }

    Ok(())
}

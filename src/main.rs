use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_ledger::cli::{
    format_route_table, handle_export_command, handle_item_command, handle_open_command,
    handle_revert_command, handle_settings_command, handle_transfer_command, ItemCommands,
    SettingsCommands,
};
use budget_ledger::config::BudgetPaths;
use budget_ledger::export::ExportFormat;
use budget_ledger::services::{BudgetService, SettingsService};
use budget_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Track incomes, accounts and expenses, move money between them, \
                  and revert transfers. Data lives in a local JSON database; set \
                  BUDGET_DATA_DIR to choose where."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income, account and expense management
    #[command(subcommand)]
    Item(ItemCommands),

    /// Move money from one item to another
    Transfer {
        /// Source item name or ID
        from: String,
        /// Destination item name or ID
        to: String,
        /// Amount (e.g. "30" or "30.00")
        amount: String,
    },

    /// Undo a transfer and delete its transaction
    Revert {
        /// Transaction ID
        transaction: String,
    },

    /// Render a view by its route path
    Open {
        /// Route path (/, /stats, /history, /export, /settings)
        #[arg(default_value = "/")]
        path: String,
    },

    /// List the route table
    Routes,

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Display preferences
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show resolved paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let paths = BudgetPaths::new()?;
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    let mut budget = BudgetService::new(&storage);
    budget.init()?;
    let mut settings = SettingsService::new(&storage);
    settings.init()?;

    match cli.command {
        Some(Commands::Item(cmd)) => {
            let symbol = settings.currency_symbol().to_string();
            handle_item_command(&mut budget, &symbol, cmd)?;
        }
        Some(Commands::Transfer { from, to, amount }) => {
            let symbol = settings.currency_symbol().to_string();
            handle_transfer_command(&mut budget, &symbol, &from, &to, &amount)?;
        }
        Some(Commands::Revert { transaction }) => {
            handle_revert_command(&mut budget, &transaction)?;
        }
        Some(Commands::Open { path }) => {
            handle_open_command(&path, &storage, &budget, &settings)?;
        }
        Some(Commands::Routes) => {
            print!("{}", format_route_table());
        }
        Some(Commands::Export {
            format,
            output,
            pretty,
        }) => {
            handle_export_command(&storage, format, output.as_deref(), pretty)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&mut settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("budget-ledger Configuration");
            println!("===========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
        }
        None => {
            handle_open_command("/", &storage, &budget, &settings)?;
        }
    }

    Ok(())
}

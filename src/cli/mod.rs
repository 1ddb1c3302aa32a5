//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod item;
pub mod settings;
pub mod transfer;
pub mod view;

pub use export::handle_export_command;
pub use item::{handle_item_command, ItemCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transfer::{handle_revert_command, handle_transfer_command};
pub use view::{format_route_table, handle_open_command, render_route};

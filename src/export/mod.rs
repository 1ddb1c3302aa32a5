//! Export module for budget-ledger
//!
//! Backs the ExportData view:
//! - JSON: full snapshot of every collection, machine-readable
//! - YAML: the same snapshot, human-readable
//! - CSV: the transaction history, spreadsheet-compatible

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;

use clap::ValueEnum;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (full snapshot)
    #[default]
    Json,
    /// CSV format (transactions only)
    Csv,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

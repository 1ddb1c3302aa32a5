//! Display formatting for terminal output
//!
//! Builds the text of each routed view from service data.

pub mod item;
pub mod report;
pub mod stats;
pub mod transaction;

pub use item::{format_home, format_item_details, format_item_list};
pub use stats::format_stats;
pub use transaction::{format_history, format_transaction_row, newest_first};

//! # mpg-cli
//!
//! Command implementations behind the `mpg` binary. Every command renders
//! to a `String` so the binary only prints; tests call these directly.

pub mod commands;
pub mod history_store;
pub mod select_arg;

pub use history_store::HistoryStore;
pub use select_arg::parse_select;

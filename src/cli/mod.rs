//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the rest of the crate.

pub mod journal;
pub mod reset;
pub mod status;

pub use journal::handle_journal_command;
pub use reset::handle_reset_command;
pub use status::handle_status_command;

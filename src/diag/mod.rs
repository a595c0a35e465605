//! Environment diagnostics for gangway
//!
//! Provides the checks behind the status screen and the `status`
//! subcommand: config directory, settings file, completion marker, journal,
//! and terminal size.

pub mod checks;

pub use checks::{run_checks, CheckResult, CheckStatus};

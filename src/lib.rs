//! Gangway - Guided first-run tour for terminal applications
//!
//! This library provides the core functionality for gangway, a small tool
//! that walks a new user through an application's surface one step at a
//! time and records completion exactly once.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `flow`: The tour itself (step catalog, navigation, completion)
//! - `journal`: Append-only activity log
//! - `diag`: Environment checks
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive tour and home screens
//!
//! # Example
//!
//! ```rust,ignore
//! use gangway::config::{GangwayPaths, Settings};
//!
//! let paths = GangwayPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod cli;
pub mod config;
pub mod diag;
pub mod error;
pub mod flow;
pub mod journal;
pub mod tui;

pub use error::GangwayError;

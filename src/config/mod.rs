//! Configuration module for gangway
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Tour completion persistence
//! - Application preferences

pub mod paths;
pub mod settings;

pub use paths::GangwayPaths;
pub use settings::Settings;

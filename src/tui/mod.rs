//! Terminal User Interface module
//!
//! This module provides the interactive side of gangway using ratatui.
//! It hosts the guided tour screen, the home screen shown after the tour,
//! and a diagnostics screen, along with the help overlay.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

// Keybindings
pub mod keybindings;

pub use app::App;
pub use terminal::run_tui;

//! Dialog modules for the TUI
//!
//! Contains modal overlays drawn above the active screen

pub mod help;

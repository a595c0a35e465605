//! Guided tour flow for gangway
//!
//! This module provides the core of the tour:
//! - Immutable step records and the built-in step catalog
//! - The flow controller (index state machine and transition table)
//! - The one-time durable completion write
//!
//! Nothing in here touches the terminal; the TUI layer renders steps and
//! feeds navigation events in.

pub mod catalog;
pub mod completion;
pub mod controller;
pub mod step;

pub use catalog::TOUR_STEPS;
pub use completion::CompletionWriter;
pub use controller::{Completion, FlowController, NavEvent, Transition};
pub use step::{Accent, Step};

//! Tour journal for gangway
//!
//! Records what happened during each tour run: starts, finishes, skips,
//! resets, and failed completion writes. The journal is append-only and
//! line-delimited JSON, one entry per line.

pub mod entry;
pub mod logger;

pub use entry::{JournalEntry, SessionId, TourEvent};
pub use logger::Journal;

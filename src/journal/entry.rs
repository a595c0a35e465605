//! Journal entry data structures
//!
//! Defines the structure of tour journal entries including the event types
//! and the per-run session identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier for one run of the tour
///
/// A newtype wrapper so session ids cannot be confused with other strings
/// at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ses-{}", &self.0.to_string()[..8])
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("ses-").unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Events recorded in the tour journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourEvent {
    /// A tour run began
    TourStarted,
    /// The user advanced through the final step
    TourFinished,
    /// The user left the tour early
    TourSkipped,
    /// The completion marker was cleared
    TourReset,
    /// The durable completion write failed
    FlagWriteFailed,
}

impl fmt::Display for TourEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TourEvent::TourStarted => write!(f, "STARTED"),
            TourEvent::TourFinished => write!(f, "FINISHED"),
            TourEvent::TourSkipped => write!(f, "SKIPPED"),
            TourEvent::TourReset => write!(f, "RESET"),
            TourEvent::FlagWriteFailed => write!(f, "FLAG-WRITE-FAILED"),
        }
    }
}

/// A single tour journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// When the event occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// The tour run this entry belongs to
    pub session: SessionId,

    /// What happened
    pub event: TourEvent,

    /// Step index the flow was at, where that is meaningful
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_index: Option<usize>,

    /// Free-form detail (e.g. the error text of a failed write)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl JournalEntry {
    /// Create an entry for a tour run beginning
    pub fn started(session: SessionId) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            event: TourEvent::TourStarted,
            step_index: None,
            detail: None,
        }
    }

    /// Create an entry for the tour finishing naturally
    pub fn finished(session: SessionId, step_index: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            event: TourEvent::TourFinished,
            step_index: Some(step_index),
            detail: None,
        }
    }

    /// Create an entry for the tour being skipped
    pub fn skipped(session: SessionId, step_index: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            event: TourEvent::TourSkipped,
            step_index: Some(step_index),
            detail: None,
        }
    }

    /// Create an entry for the completion marker being cleared
    pub fn reset(session: SessionId) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            event: TourEvent::TourReset,
            step_index: None,
            detail: None,
        }
    }

    /// Create an entry for a failed completion write
    pub fn flag_write_failed(session: SessionId, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            session,
            event: TourEvent::FlagWriteFailed,
            step_index: None,
            detail: Some(detail.into()),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.session,
            self.event
        );

        if let Some(index) = self.step_index {
            output.push_str(&format!(" (step {})", index + 1));
        }

        if let Some(detail) = &self.detail {
            output.push_str(&format!(": {}", detail));
        }

        output
    }
}

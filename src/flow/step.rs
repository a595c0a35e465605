//! Step records for the guided tour
//!
//! A step is an immutable display record: the tour is a fixed ordered
//! sequence of these, defined once at startup and never created, mutated,
//! or destroyed while the app runs.

/// Accent token attached to each step
///
/// Tokens are presentation-neutral here; the TUI maps each one to a
/// terminal color when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Sky,
    Mint,
    Amber,
    Coral,
    Violet,
}

/// A single step of the guided tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Position of this step in the tour, starting at 0
    pub ordinal: usize,
    /// Short heading shown on the step card
    pub title: &'static str,
    /// One-line tagline under the heading
    pub subtitle: &'static str,
    /// Longer body text for the card
    pub description: &'static str,
    /// Glyph shown beside the heading
    pub icon: &'static str,
    /// Accent token for this step
    pub accent: Accent,
}

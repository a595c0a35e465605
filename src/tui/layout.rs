//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: screen body plus status bar, and
//! the per-screen splits.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Top-level layout regions
pub struct ScreenLayout {
    /// Screen body
    pub body: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl ScreenLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            body: vertical[0],
            status_bar: vertical[1],
        }
    }
}

/// Layout for the tour screen
pub struct TourLayout {
    /// Step dots row
    pub dots: Rect,
    /// Step card
    pub card: Rect,
    /// Progress gauge
    pub gauge: Rect,
}

impl TourLayout {
    /// Calculate tour screen layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Dots
                Constraint::Min(7),    // Card
                Constraint::Length(3), // Gauge
            ])
            .split(area);

        Self {
            dots: chunks[0],
            card: chunks[1],
            gauge: chunks[2],
        }
    }
}

/// Layout for the home screen
pub struct HomeLayout {
    /// App banner
    pub banner: Rect,
    /// Tour completion summary
    pub summary: Rect,
    /// Recent journal entries
    pub journal: Rect,
}

impl HomeLayout {
    /// Calculate home screen layout
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Banner
                Constraint::Length(3), // Summary
                Constraint::Min(3),    // Journal
            ])
            .split(area);

        Self {
            banner: chunks[0],
            summary: chunks[1],
            journal: chunks[2],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

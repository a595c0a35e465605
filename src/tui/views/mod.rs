//! TUI Views module
//!
//! Contains the three screens: tour, home, and status, plus the shared
//! status bar.

pub mod home;
pub mod status;
pub mod status_bar;
pub mod tour;

use ratatui::Frame;

use super::app::{ActiveScreen, App};
use super::dialogs;
use super::layout::ScreenLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = ScreenLayout::new(frame.area());

    // Render the active screen
    match app.active_screen {
        ActiveScreen::Tour => {
            tour::render(frame, app, layout.body);
        }
        ActiveScreen::Home => {
            home::render(frame, app, layout.body);
        }
        ActiveScreen::Status => {
            status::render(frame, app, layout.body);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render help overlay if active
    if app.show_help {
        dialogs::help::render(frame, app);
    }
}

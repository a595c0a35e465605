//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the active
//! screen. On the tour screen keys become navigation events for the flow
//! controller; the handler acts only on the transition it reports back.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveScreen, App};
use super::event::Event;
use crate::flow::Transition;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // The help overlay swallows the next key
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return Ok(());
        }
        _ => {}
    }

    match app.active_screen {
        ActiveScreen::Tour => handle_tour_key(app, key),
        ActiveScreen::Home => handle_home_key(app, key),
        ActiveScreen::Status => handle_status_key(app, key),
    }
}

/// Handle keys on the tour screen
fn handle_tour_key(app: &mut App, key: KeyEvent) -> Result<()> {
    let transition = match key.code {
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') | KeyCode::Enter => {
            app.flow.advance()
        }
        KeyCode::Left | KeyCode::Char('h') => app.flow.retreat(),
        KeyCode::Char(c @ '1'..='9') => {
            // '1' targets the first step; anything past the end is ignored
            // by the controller
            let target = c as usize - '1' as usize;
            app.flow.jump_to(target)
        }
        KeyCode::Char('g') => app.flow.jump_to(0),
        KeyCode::Char('G') => app.flow.jump_to(app.flow.step_count() - 1),
        KeyCode::Char('s') | KeyCode::Esc => app.flow.skip(),
        _ => return Ok(()),
    };

    // Navigated and Ignored need no action here; the next draw reads the
    // controller's index.
    if let Transition::Completed(how) = transition {
        app.finish_tour(how);
    }

    Ok(())
}

/// Handle keys on the home screen
fn handle_home_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('t') => app.start_tour(),
        KeyCode::Char('s') => app.switch_screen(ActiveScreen::Status),
        _ => {}
    }

    Ok(())
}

/// Handle keys on the status screen
fn handle_status_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('r') => {
            app.refresh_checks();
            app.set_status("Checks refreshed");
        }
        KeyCode::Esc => app.switch_screen(ActiveScreen::Home),
        _ => {}
    }

    Ok(())
}

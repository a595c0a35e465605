//! Status bar view
//!
//! Shows the active screen, any transient message, and key hints. The back
//! hint is left out on the first tour step.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveScreen, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    // Screen name
    let screen_name = match app.active_screen {
        ActiveScreen::Tour => " Tour",
        ActiveScreen::Home => " Home",
        ActiveScreen::Status => " Status",
    };
    spans.push(Span::styled(
        screen_name,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = hints_for(app);

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.len()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}

/// Key hints for the current screen
fn hints_for(app: &App) -> String {
    match app.active_screen {
        ActiveScreen::Tour => {
            let forward = if app.flow.is_last() {
                "Enter:Finish"
            } else {
                "->:Next"
            };
            if app.flow.is_first() {
                format!("{}  Esc:Skip  ?:Help  q:Quit ", forward)
            } else {
                format!("<-:Back  {}  Esc:Skip  ?:Help  q:Quit ", forward)
            }
        }
        ActiveScreen::Home => "t:Tour  s:Status  ?:Help  q:Quit ".to_string(),
        ActiveScreen::Status => "r:Refresh  Esc:Home  ?:Help  q:Quit ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GangwayPaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_back_hint_hidden_on_first_step() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&paths, &settings).unwrap();
        app.start_tour();

        assert!(!hints_for(&app).contains("Back"));

        app.flow.advance();
        assert!(hints_for(&app).contains("Back"));
    }

    #[test]
    fn test_finish_hint_on_last_step() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&paths, &settings).unwrap();
        app.start_tour();

        app.flow.jump_to(app.flow.step_count() - 1);
        assert!(hints_for(&app).contains("Finish"));
    }
}

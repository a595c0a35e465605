//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveScreen, App};
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current screen
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let (context, heading) = match app.active_screen {
        ActiveScreen::Tour => (KeyContext::Tour, "Tour Keys"),
        ActiveScreen::Home => (KeyContext::Home, "Home Keys"),
        ActiveScreen::Status => (KeyContext::Status, "Status Keys"),
    };

    let mut lines = vec![
        Line::from(vec![Span::styled(
            heading,
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
    ];

    for binding in get_keybindings(context) {
        lines.push(key_line(format_keybinding(binding), binding.description));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: String, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GangwayPaths, Settings};
    use tempfile::TempDir;

    #[test]
    fn test_help_lines_cover_screen_bindings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = GangwayPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();
        let mut app = App::new(&paths, &settings).unwrap();
        app.start_tour();

        let lines = get_help_lines(&app);
        let text: String = lines
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.as_ref()))
            .collect();

        assert!(text.contains("Tour Keys"));
        assert!(text.contains("Skip the tour"));
        assert!(text.contains("Quit"));
    }
}

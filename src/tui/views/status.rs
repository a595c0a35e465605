//! Status screen
//!
//! Lists the diagnostic checks with severity glyphs and a one-line summary.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::diag::CheckStatus;
use crate::tui::app::App;

/// Map a check status to a terminal color
fn status_color(status: CheckStatus) -> Color {
    match status {
        CheckStatus::Ok => Color::Green,
        CheckStatus::Warning => Color::Yellow,
        CheckStatus::Error => Color::Red,
    }
}

/// Render the status screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut lines = vec![Line::from(""), summary_line(app), Line::from("")];

    for check in &app.checks {
        let color = status_color(check.status);
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", check.status.glyph()), Style::default().fg(color)),
            Span::raw(format!("{:<20}", check.name)),
            Span::styled(check.detail.clone(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Diagnostics ");
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn summary_line(app: &App) -> Line<'static> {
    let warnings = app
        .checks
        .iter()
        .filter(|c| c.status == CheckStatus::Warning)
        .count();
    let errors = app
        .checks
        .iter()
        .filter(|c| c.status == CheckStatus::Error)
        .count();

    let (text, color) = if errors > 0 {
        (format!(" {} check(s) failing", errors), Color::Red)
    } else if warnings > 0 {
        (format!(" {} warning(s)", warnings), Color::Yellow)
    } else {
        (" All checks passed".to_string(), Color::Green)
    };

    Line::from(Span::styled(text, Style::default().fg(color)))
}

//! Home screen
//!
//! The destination after the tour ends: app banner, completion state, and
//! the most recent journal entries.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::HomeLayout;

/// Render the home screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = HomeLayout::new(area);

    render_banner(frame, layout.banner);
    render_summary(frame, app, layout.summary);
    render_journal(frame, app, layout.journal);
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "gangway",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("guided first-run tours, v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let banner = Paragraph::new(lines);
    frame.render_widget(banner, area);
}

fn render_summary(frame: &mut Frame, app: &App, area: Rect) {
    let line = if app.tour_completed {
        let when = match app.tour_completed_at {
            Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
            None => "earlier".to_string(),
        };
        Line::from(vec![
            Span::styled("+ ", Style::default().fg(Color::Green)),
            Span::styled(
                format!("Tour completed {}", when),
                Style::default().fg(Color::Green),
            ),
            Span::styled("  (t to watch it again)", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            Span::styled("! ", Style::default().fg(Color::Yellow)),
            Span::styled("Tour not completed yet", Style::default().fg(Color::Yellow)),
            Span::styled("  (t to take it)", Style::default().fg(Color::DarkGray)),
        ])
    };

    let block = Block::default().borders(Borders::ALL).title(" Tour ");
    let summary = Paragraph::new(line).block(block);
    frame.render_widget(summary, area);
}

fn render_journal(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = if app.recent_entries.is_empty() {
        vec![Line::from(Span::styled(
            "No journal entries yet.",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        app.recent_entries
            .iter()
            .map(|entry| Line::from(entry.format_human_readable()))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent activity ");
    let journal = Paragraph::new(lines).block(block);
    frame.render_widget(journal, area);
}

//! Tour screen
//!
//! Renders the current step card, the step dots, and the progress gauge.
//! Everything shown here is read from the flow controller and the step
//! table; this view never mutates flow state.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::flow::Accent;
use crate::tui::app::App;
use crate::tui::layout::TourLayout;

/// Map an accent token to a terminal color
pub fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Sky => Color::Cyan,
        Accent::Mint => Color::Green,
        Accent::Amber => Color::Yellow,
        Accent::Coral => Color::LightRed,
        Accent::Violet => Color::Magenta,
    }
}

/// Render the tour screen
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = TourLayout::new(area);

    let step = match app.steps.get(app.flow.index()) {
        Some(step) => step,
        None => return,
    };
    let color = accent_color(step.accent);

    render_dots(frame, app, layout.dots);

    // Step card
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} {} ", step.icon, step.title))
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            step.subtitle,
            Style::default().fg(color).add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(step.description),
    ];

    let card = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(card, layout.card);

    // Progress gauge, driven by the controller's derived progress
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(color))
        .ratio(app.flow.progress())
        .label(format!(
            "Step {} of {}",
            app.flow.index() + 1,
            app.flow.step_count()
        ));
    frame.render_widget(gauge, layout.gauge);
}

/// Render one dot per step, the current one in its accent color
fn render_dots(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();

    for step in app.steps {
        let (glyph, style) = if step.ordinal == app.flow.index() {
            ("●", Style::default().fg(accent_color(step.accent)))
        } else if step.ordinal < app.flow.index() {
            ("●", Style::default().fg(Color::DarkGray))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(glyph, style));
        spans.push(Span::raw(" "));
    }

    let dots = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(dots, area);
}

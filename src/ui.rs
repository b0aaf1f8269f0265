//! The UI renders the application state into something visible and clickable.
//!
//! Each frame runs the layout pass for the document area first, so the document rows and the
//! overlays drawn on top of them always come from the same geometry.

use crate::app_state::AppState;
use crate::document::{LineKind, RenderedLine};
use crate::widget::OverlayWidget;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Renders the document with its section overlays and the help bar.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(app.document.path.clone());
    let doc_area = block.inner(chunks[0]);
    f.render_widget(block, chunks[0]);

    app.layout(doc_area);

    let first = usize::try_from(app.viewport.scroll).unwrap_or(usize::MAX);
    let lines: Vec<Line> = app
        .rendition
        .lines
        .iter()
        .skip(first)
        .take(usize::from(doc_area.height))
        .map(styled_line)
        .collect();
    f.render_widget(Paragraph::new(lines), doc_area);

    for overlay in app.layer.overlays() {
        f.render_widget(
            OverlayWidget::new(overlay, &app.viewport, &app.edit_label),
            doc_area,
        );
    }
    for overlay in app.layer.overlays_mut() {
        overlay.mark_displayed();
    }

    let help_text = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Scroll | PgUp/PgDn/Space: Page | Click/Enter: Edit section | l: Toggle listener | q: Quit"
            .to_string()
    });
    let status = if app.listener_attached() {
        "Listener attached"
    } else {
        "Listener detached"
    };
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL).title(status));
    f.render_widget(help, chunks[1]);
}

fn styled_line(line: &RenderedLine) -> Line<'_> {
    let style = match line.kind {
        LineKind::Heading { level, .. } => heading_style(level),
        LineKind::Code => Style::default().fg(Color::DarkGray),
        LineKind::Body => Style::default(),
    };
    Line::styled(line.text.as_str(), style)
}

fn heading_style(level: usize) -> Style {
    let color = match level {
        1 => Color::Magenta,
        2 => Color::Blue,
        3 => Color::Green,
        _ => Color::Yellow,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

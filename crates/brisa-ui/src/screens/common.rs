//! Shared widget builders so every screen keeps the same frame style.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row},
};

pub const MISSING: &str = "--";

pub fn titled_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

/// A label/value table row with the value in green.
pub fn kv_row(label: String, value: String) -> Row<'static> {
    Row::new(vec![
        Cell::from(format!(" {label}")),
        Cell::from(value).style(Style::default().fg(Color::Green)),
    ])
}

/// Style for the selected entry of a list.
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

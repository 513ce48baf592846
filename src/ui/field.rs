//! Field rendering utilities for the estimate form

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus a message line
pub const FIELD_HEIGHT: u16 = 4;

/// How a field should be drawn
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub is_active: bool,
    pub is_select: bool,
    pub is_enabled: bool,
    pub error: Option<&'a str>,
}

/// Draw a form field with its validation message underneath
pub fn draw_field(frame: &mut Frame, area: Rect, view: FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let accent = if view.error.is_some() {
        Color::Red
    } else if view.is_active && view.is_enabled {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if view.is_enabled {
        Style::default().fg(if view.is_active { Color::Cyan } else { Color::White })
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    if view.is_select {
        let arrows = Style::default().fg(accent);
        spans.push(Span::styled("◀ ", arrows));
        spans.push(Span::styled(view.value, value_style));
        spans.push(Span::styled(" ▶", arrows));
    } else {
        let display_value = if view.value.is_empty() && !view.is_active {
            "(empty)"
        } else {
            view.value
        };
        spans.push(Span::styled(display_value, value_style));
        if view.is_active && view.is_enabled {
            spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", view.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(error) = view.error {
        let message = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(message, chunks[1]);
    }
}

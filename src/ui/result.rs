//! Result view: the estimated price and what it was estimated for

use crate::estimator::{EstimationResult, Field};
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the estimate result
pub fn draw(frame: &mut Frame, area: Rect, result: &EstimationResult) {
    let block = Block::default()
        .title(" Estimated Resale Price ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // spacing
            Constraint::Length(1), // price
            Constraint::Length(1), // timestamp
            Constraint::Length(1), // spacing
            Constraint::Length(Field::ALL.len() as u16 + 2), // summary
            Constraint::Min(0),
            Constraint::Length(1), // help
        ])
        .margin(1)
        .split(inner);

    let price = Paragraph::new(Line::from(Span::styled(
        format!("${}", result.estimated_price),
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(price, chunks[1]);

    let when = result.estimated_at.with_timezone(&Local);
    let timestamp = Paragraph::new(format!("estimated {}", when.format("%Y-%m-%d %H:%M")))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(timestamp, chunks[2]);

    let input = &result.source_input;
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|field| {
            let value = if *field == Field::OriginalPrice {
                format!("${}", input.original_price)
            } else {
                input.display_value(*field).to_string()
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<20}", field.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(value),
            ])
        })
        .collect();
    let summary = Paragraph::new(lines).block(
        Block::default()
            .title(" Item ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(summary, chunks[4]);

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": price another item  "),
        Span::styled("y", Style::default().fg(Color::Cyan)),
        Span::raw(": copy  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}

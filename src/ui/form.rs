//! Estimate form rendering

use super::components::{render_action_button, BUTTON_HEIGHT};
use super::field::{draw_field, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::estimator::Field;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::FormButton;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the estimate form with action sidebar
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    // Split into form (left) and action panel (right)
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(22), // Action panel
        ])
        .split(area);

    draw_fields(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the five inputs
fn draw_fields(frame: &mut Frame, area: Rect, app: &App) {
    let loading = app.estimator.is_loading();
    let form_focused = !app.state.form.is_buttons_row_active() && !loading;

    let block = Block::default()
        .title(" Estimate Resale Price ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if form_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); Field::ALL.len()];
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let input = app.estimator.input();
    let errors = app.estimator.errors();
    for (idx, field) in Field::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            FieldView {
                label: field.label(),
                value: input.display_value(*field),
                is_active: app.state.form.is_active(*field),
                is_select: field.is_select(),
                is_enabled: !loading,
                error: errors.get(field).map(String::as_str),
            },
        );
    }

    let help = Paragraph::new(format!(
        "{SUBMIT_SHORTCUT}: estimate   {RESET_SHORTCUT}: clear   Left/Right: change option"
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[Field::ALL.len() + 1]);
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let loading = app.estimator.is_loading();
    let is_focused = app.state.form.is_buttons_row_active() && !loading;
    let selected = app.state.form.selected_button;

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if is_focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Estimate (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Length(2),             // Loading indicator
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    let estimate_label = if loading {
        format!("{} Estimating", app.state.spinner_frame())
    } else {
        FormButton::Estimate.label().to_string()
    };
    render_action_button(
        frame,
        chunks[0],
        &estimate_label,
        is_focused && selected == FormButton::Estimate,
        !loading,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        chunks[1],
        FormButton::Reset.label(),
        is_focused && selected == FormButton::Reset,
        !loading,
        Some(Color::Gray),
    );

    if loading {
        let waiting = Paragraph::new(Line::from(Span::styled(
            " Asking the model...",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(waiting, chunks[2]);
    }
}

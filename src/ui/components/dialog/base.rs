//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Widest a dialog gets, borders included
const MAX_WIDTH: u16 = 60;
/// Horizontal padding inside the borders
const PADDING: u16 = 4;

/// A modal message box
pub struct Dialog<'a> {
    pub title: &'a str,
    /// Title and border colour
    pub accent: Color,
    /// Message text; `\n` starts a new paragraph
    pub message: &'a str,
    /// Key hint shown under the message
    pub hint: Vec<Span<'a>>,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, dialog: Dialog) {
    let area = frame.area();
    let lines = wrap_text(dialog.message, MAX_WIDTH.saturating_sub(PADDING + 2) as usize);

    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(dialog.title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    // title, blank, message, blank, hint, borders
    let height = lines.len() as u16 + 6;
    let dialog_area = centered_rect(area, content_width + PADDING + 2, height);

    frame.render_widget(Clear, dialog_area);

    let mut content = Vec::with_capacity(lines.len() + 4);
    content.push(Line::from(Span::styled(
        dialog.title,
        Style::default()
            .fg(dialog.accent)
            .add_modifier(Modifier::BOLD),
    )));
    content.push(Line::default());
    content.extend(lines.into_iter().map(Line::from));
    content.push(Line::default());
    content.push(Line::from(dialog.hint));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dialog.accent));
    let paragraph = Paragraph::new(content)
        .block(block)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, dialog_area);
}

/// Center a `width` x `height` box in `area`, clamped to fit
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(MAX_WIDTH).min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Greedy word wrap; words longer than `max_width` stay on their own line
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let needed = current.chars().count() + word.chars().count() + 1;
            if !current.is_empty() && needed > max_width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

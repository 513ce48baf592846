//! Error dialog component

use super::base::{render_dialog, Dialog};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render the modal error dialog over the current view
pub fn render_error_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    render_dialog(
        frame,
        Dialog {
            title: "Error",
            accent: Color::Red,
            message,
            hint: vec![
                Span::styled("Enter", key_style),
                Span::raw("/"),
                Span::styled("Esc", key_style),
                Span::raw(" dismiss, your input is kept"),
            ],
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(width: u16, height: u16, message: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_error_dialog(frame, message))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_shows_title_message_and_hint() {
        let screen = render(80, 20, "The pricing service answered with 500.");
        assert!(screen.contains("Error"));
        assert!(screen.contains("The pricing service answered with 500."));
        assert!(screen.contains("dismiss"));
    }

    #[test]
    fn test_fits_in_a_tiny_terminal() {
        // Must not draw outside the buffer
        let screen = render(16, 4, "Could not reach the pricing service.");
        assert!(screen.contains("Error"));
    }
}

//! UI module for rendering the TUI

mod components;
mod field;
mod form;
mod layout;
mod result;

use crate::app::App;
use crate::estimator::Phase;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on the estimator phase
    match app.estimator.phase() {
        Phase::Editing | Phase::Loading(_) => form::draw(frame, main_area, app),
        Phase::Result(result) => result::draw(frame, main_area, result),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MockCompletionClient;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(Arc::new(MockCompletionClient::new()))
    }

    #[test]
    fn test_form_shows_all_fields_and_buttons() {
        let screen = render(&app());
        for label in ["Brand", "Category", "Original Price ($)", "Condition", "Age"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(screen.contains("Estimate"));
        assert!(screen.contains("Reset"));
        assert!(screen.contains("Not Worn"));
    }

    #[test]
    fn test_form_shows_validation_messages() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        let screen = render(&app);
        assert!(screen.contains("Brand is required"));
        assert!(screen.contains("Original price is required"));
    }

    #[test]
    fn test_error_dialog_is_drawn() {
        let mut app = app();
        app.push_error("Could not reach the pricing service.");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("pricing service"));
    }
}

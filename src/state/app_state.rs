//! Application state definitions

use super::forms::EstimateForm;
use std::collections::VecDeque;

/// Braille spinner shown while a request is in flight
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// UI state that sits around the estimator controller
#[derive(Debug, Default)]
pub struct AppState {
    /// Focus within the estimate form
    pub form: EstimateForm,
    /// Messages waiting to be shown in the error dialog, oldest first
    error_queue: VecDeque<String>,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Animation counter for the loading spinner
    spinner_tick: usize,
}

impl AppState {
    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Clear form focus state
    pub fn clear_form(&mut self) {
        self.form = EstimateForm::new();
    }

    /// Advance the spinner by one frame
    pub fn tick_spinner(&mut self) {
        self.spinner_tick = self.spinner_tick.wrapping_add(1);
    }

    pub fn spinner_frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Form;

    #[test]
    fn test_default_has_no_errors() {
        let state = AppState::default();
        assert!(!state.has_errors());
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_errors_are_shown_in_order() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());

        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_clear_form_resets_focus() {
        let mut state = AppState::default();
        state.form.next_field();
        state.form.next_field();
        state.clear_form();
        assert_eq!(state.form.active_field(), 0);
    }

    #[test]
    fn test_spinner_wraps() {
        let mut state = AppState::default();
        let first = state.spinner_frame();
        for _ in 0..SPINNER_FRAMES.len() {
            state.tick_spinner();
        }
        assert_eq!(state.spinner_frame(), first);
    }
}

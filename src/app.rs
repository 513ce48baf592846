//! Application state and core logic

use crate::completion::{CompletionClient, TransportError};
use crate::estimator::{CompletionOutcome, Estimator, SubmitOutcome};
use crate::state::{AppState, FocusTarget, Form, FormButton};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use uuid::Uuid;

/// Reply for a request, tagged with its id
type CompletionMessage = (Uuid, Result<String, TransportError>);

/// Main application struct
pub struct App {
    /// UI state (focus, errors, status line)
    pub state: AppState,
    /// Form controller
    pub estimator: Estimator,
    /// Completion client shared with the in-flight request task
    client: Arc<dyn CompletionClient>,
    completions_tx: UnboundedSender<CompletionMessage>,
    completions_rx: UnboundedReceiver<CompletionMessage>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            estimator: Estimator::new(),
            client,
            completions_tx,
            completions_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        if self.estimator.is_loading() {
            self.state.tick_spinner();
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        if self.estimator.is_loading() {
            self.handle_loading_key(key);
        } else if self.estimator.result().is_some() {
            self.handle_result_key(key);
        } else {
            self.handle_form_key(key);
        }
        Ok(())
    }

    /// Handle keys while the form is editable
    fn handle_form_key(&mut self, key: KeyEvent) {
        let focus = self.state.form.focus();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Left/Right move between buttons on the action row
            KeyCode::Left | KeyCode::Right if focus == FocusTarget::Buttons => {
                self.state.form.selected_button = self.state.form.selected_button.toggle();
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if focus.is_select() => {
                if let Some(field) = focus.field() {
                    self.estimator
                        .cycle_option(field, key.code != KeyCode::Left);
                }
            }
            KeyCode::Enter if focus == FocusTarget::Buttons => {
                match self.state.form.selected_button {
                    FormButton::Estimate => self.submit(),
                    FormButton::Reset => self.reset(),
                }
            }
            KeyCode::Enter => self.submit(),
            // Form field input (only on text inputs)
            KeyCode::Char(c) if focus.accepts_text() && !ctrl => {
                if let Some(field) = focus.field() {
                    self.estimator.edit_text(field, |text| text.push(c));
                }
            }
            KeyCode::Backspace if focus.accepts_text() => {
                if let Some(field) = focus.field() {
                    self.estimator.edit_text(field, |text| {
                        text.pop();
                    });
                }
            }
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys while a request is in flight; only submit is meaningful and it is ignored
    fn handle_loading_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Char('s') if ctrl => self.submit(),
            _ => {}
        }
    }

    /// Handle keys on the result view
    fn handle_result_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.reset(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('y') => self.copy_estimate(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Submit the form; on valid input the request runs on a background task
    pub fn submit(&mut self) {
        match self.estimator.submit() {
            SubmitOutcome::Started(ticket) => {
                let client = Arc::clone(&self.client);
                let tx = self.completions_tx.clone();
                tokio::spawn(async move {
                    let reply = client.get_completion(&ticket.prompt).await;
                    // Receiver lives as long as the app; a closed channel means we are shutting down
                    let _ = tx.send((ticket.id, reply));
                });
            }
            SubmitOutcome::Invalid(errors) => {
                if let Some(field) = errors.keys().next() {
                    self.state.form.focus_field(*field);
                }
                let plural = if errors.len() == 1 { "" } else { "s" };
                self.state.status_message =
                    Some(format!("Fix {} field{} to continue", errors.len(), plural));
            }
            SubmitOutcome::Busy => {}
        }
    }

    /// Clear the form and any result ("price another item")
    pub fn reset(&mut self) {
        self.estimator.reset();
        self.state.clear_form();
    }

    /// Apply every reply that has arrived since the last call
    pub fn poll_completions(&mut self) {
        while let Ok((id, reply)) = self.completions_rx.try_recv() {
            self.apply_completion(id, reply);
        }
    }

    fn apply_completion(&mut self, id: Uuid, reply: Result<String, TransportError>) {
        let message = reply.as_ref().err().map(TransportError::user_message);
        match self.estimator.complete(id, reply) {
            CompletionOutcome::Estimated(_) => self.state.status_message = None,
            CompletionOutcome::Failed => {
                self.state.status_message = None;
                if let Some(message) = message {
                    self.push_error(message);
                }
            }
            CompletionOutcome::Stale => {}
        }
    }

    /// Copy the current estimate to the system clipboard
    fn copy_estimate(&mut self) {
        if let Some(result) = self.estimator.result() {
            let text = format!("${}", result.estimated_price);
            match copy_to_clipboard(&text) {
                Ok(()) => self.state.status_message = Some(format!("Copied {text}")),
                Err(err) => {
                    tracing::warn!("Clipboard unavailable: {err}");
                    self.push_error("Could not access the clipboard");
                }
            }
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

//! Estimator form controller
//!
//! Owns the form input, the validation errors and the explicit [`Phase`] of the
//! single request/response cycle:
//!
//! ```text
//! Editing --submit(valid)--> Loading --complete(ok)--> Result --reset--> Editing
//!                               \--complete(err)--> Editing
//! ```
//!
//! The controller never performs I/O. [`Estimator::submit`] hands back a
//! [`CompletionTicket`]; the caller sends its prompt through a
//! [`CompletionClient`](crate::completion::CompletionClient) and feeds the
//! outcome to [`Estimator::complete`].

mod input;
mod prompt;
mod validation;

pub use input::{Field, FieldError, FormInput, SelectOption};
#[cfg(test)]
pub use input::{AgeBracket, WearLevel};
pub use prompt::{build_prompt, extract_price};
pub use validation::{validate, ValidationErrors};

use crate::completion::TransportError;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A successful estimate and the input it was made for
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    /// Numeric text extracted from the model's reply
    pub estimated_price: String,
    /// Copy of the form at submit time
    pub source_input: FormInput,
    pub estimated_at: DateTime<Utc>,
}

/// The request currently in flight
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub id: Uuid,
    pub snapshot: FormInput,
    pub started_at: DateTime<Utc>,
}

/// Where the controller is in the request/response cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Editing,
    Loading(PendingRequest),
    Result(EstimationResult),
}

/// What the caller must send for a started submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTicket {
    pub id: Uuid,
    pub prompt: String,
}

/// Result of [`Estimator::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Exactly one completion request must now be issued for the ticket
    Started(CompletionTicket),
    /// Input rejected; no request
    Invalid(ValidationErrors),
    /// A request is already in flight or a result is showing; ignored
    Busy,
}

/// Result of [`Estimator::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Estimated(String),
    Failed,
    /// Reply for a request that is no longer current
    Stale,
}

/// Form controller for a single estimate at a time
#[derive(Debug, Default)]
pub struct Estimator {
    input: FormInput,
    errors: ValidationErrors,
    phase: Phase,
}

impl Estimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &FormInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading(_))
    }

    pub fn result(&self) -> Option<&EstimationResult> {
        match &self.phase {
            Phase::Result(result) => Some(result),
            _ => None,
        }
    }

    /// Set a field by name, clearing its validation error
    ///
    /// Every edit goes through here, keystrokes included.
    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), FieldError> {
        let field: Field = name.parse()?;
        self.set_field(field, value)
    }

    fn set_field(&mut self, field: Field, value: &str) -> Result<(), FieldError> {
        self.input.set(field, value)?;
        self.errors.remove(&field);
        Ok(())
    }

    /// Edit a free-text field; returns false for select fields
    pub fn edit_text(&mut self, field: Field, edit: impl FnOnce(&mut String)) -> bool {
        if field.is_select() {
            return false;
        }
        let mut text = self.input.display_value(field).to_string();
        edit(&mut text);
        self.update_field(field.name(), &text).is_ok()
    }

    /// Step a select field to its next or previous option; returns false for text fields
    pub fn cycle_option(&mut self, field: Field, forward: bool) -> bool {
        let key = match field {
            Field::WearLevel => step(self.input.wear_level, forward).key(),
            Field::AgeBracket => step(self.input.age_bracket, forward).key(),
            _ => return false,
        };
        self.update_field(field.name(), key).is_ok()
    }

    /// Validate and, when acceptable, move to `Loading` and return the prompt to send
    pub fn submit(&mut self) -> SubmitOutcome {
        if !matches!(self.phase, Phase::Editing) {
            debug!("Submit ignored while not editing");
            return SubmitOutcome::Busy;
        }

        self.errors = validate(&self.input);
        if !self.errors.is_empty() {
            debug!(invalid_fields = self.errors.len(), "Submit blocked by validation");
            return SubmitOutcome::Invalid(self.errors.clone());
        }

        let id = Uuid::new_v4();
        let snapshot = self.input.clone();
        let prompt = build_prompt(&snapshot);
        info!(request_id = %id, brand = %snapshot.brand, category = %snapshot.category, "Estimate requested");

        self.phase = Phase::Loading(PendingRequest {
            id,
            snapshot,
            started_at: Utc::now(),
        });

        SubmitOutcome::Started(CompletionTicket { id, prompt })
    }

    /// Apply the outcome of the request identified by `id`
    pub fn complete(
        &mut self,
        id: Uuid,
        reply: Result<String, TransportError>,
    ) -> CompletionOutcome {
        let pending = match &self.phase {
            Phase::Loading(pending) if pending.id == id => pending.clone(),
            _ => {
                debug!(request_id = %id, "Ignoring reply for a request that is no longer current");
                return CompletionOutcome::Stale;
            }
        };

        match reply {
            Ok(text) => {
                let estimated_price = extract_price(&text);
                let elapsed_ms = (Utc::now() - pending.started_at).num_milliseconds();
                info!(request_id = %id, price = %estimated_price, elapsed_ms, "Estimate received");
                self.phase = Phase::Result(EstimationResult {
                    estimated_price: estimated_price.clone(),
                    source_input: pending.snapshot,
                    estimated_at: Utc::now(),
                });
                CompletionOutcome::Estimated(estimated_price)
            }
            Err(err) => {
                warn!(request_id = %id, error = %err, "Estimate request failed");
                self.phase = Phase::Editing;
                CompletionOutcome::Failed
            }
        }
    }

    /// Back to an empty form with no errors and no result
    pub fn reset(&mut self) {
        if let Phase::Loading(pending) = &self.phase {
            debug!(request_id = %pending.id, "Reset while loading; reply will be ignored");
        }
        self.input = FormInput::default();
        self.errors.clear();
        self.phase = Phase::Editing;
    }
}

fn step<T: SelectOption>(current: T, forward: bool) -> T {
    if forward {
        current.next()
    } else {
        current.prev()
    }
}

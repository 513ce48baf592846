//! Form focus layer
//!
//! Tracks which input or button of the estimate form has keyboard focus.
//! Field values themselves live in the estimator controller.

mod field;
mod form_state;

pub use field::FocusTarget;
pub use form_state::{EstimateForm, Form, FormButton};

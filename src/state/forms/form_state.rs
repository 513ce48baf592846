//! Form focus state

use super::field::FocusTarget;
use crate::estimator::Field;

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn focus(&self) -> FocusTarget;
}

/// Buttons on the form's action panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Estimate,
    Reset,
}

impl FormButton {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Estimate => "Estimate",
            Self::Reset => "Reset",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Estimate => Self::Reset,
            Self::Reset => Self::Estimate,
        }
    }
}

/// Focus state of the estimate form
#[derive(Debug, Clone, Default)]
pub struct EstimateForm {
    /// 0-4 are the inputs in [`Field::ALL`] order, 5 is the buttons row
    pub active_field_index: usize,
    /// Which button is selected when on the buttons row
    pub selected_button: FormButton,
}

impl EstimateForm {
    const BUTTONS_ROW: usize = Field::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Whether `field` has focus
    pub fn is_active(&self, field: Field) -> bool {
        self.focus() == FocusTarget::Input(field)
    }

    /// Move focus onto a specific input
    pub fn focus_field(&mut self, field: Field) {
        if let Some(index) = Field::ALL.iter().position(|f| *f == field) {
            self.active_field_index = index;
        }
    }
}

impl Form for EstimateForm {
    fn field_count(&self) -> usize {
        Self::BUTTONS_ROW + 1 // five inputs, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
    fn focus(&self) -> FocusTarget {
        Field::ALL
            .get(self.active_field_index)
            .map_or(FocusTarget::Buttons, |f| FocusTarget::Input(*f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod estimate_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = EstimateForm::new();
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, FormButton::Estimate);
            assert_eq!(form.focus(), FocusTarget::Input(Field::Brand));
        }

        #[test]
        fn test_field_count() {
            let form = EstimateForm::new();
            assert_eq!(form.field_count(), 6);
        }

        #[test]
        fn test_is_buttons_row_active() {
            let mut form = EstimateForm::new();
            assert!(!form.is_buttons_row_active());
            form.active_field_index = 5;
            assert!(form.is_buttons_row_active());
            assert_eq!(form.focus(), FocusTarget::Buttons);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = EstimateForm::new();
            for _ in 0..6 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0); // Wrapped back
        }

        #[test]
        fn test_prev_field_cycles() {
            let mut form = EstimateForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active()); // Wrapped to last
        }

        #[test]
        fn test_focus_follows_field_order() {
            let mut form = EstimateForm::new();
            let mut seen = Vec::new();
            for _ in 0..5 {
                seen.push(form.focus().field().unwrap());
                form.next_field();
            }
            assert_eq!(seen, Field::ALL.to_vec());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = EstimateForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 5);
        }

        #[test]
        fn test_focus_field() {
            let mut form = EstimateForm::new();
            form.focus_field(Field::OriginalPrice);
            assert!(form.is_active(Field::OriginalPrice));
            assert!(!form.is_active(Field::Brand));
        }
    }

    mod form_button {
        use super::*;

        #[test]
        fn test_toggle() {
            assert_eq!(FormButton::Estimate.toggle(), FormButton::Reset);
            assert_eq!(FormButton::Reset.toggle(), FormButton::Estimate);
        }

        #[test]
        fn test_labels() {
            assert_eq!(FormButton::Estimate.label(), "Estimate");
            assert_eq!(FormButton::Reset.label(), "Reset");
        }
    }
}

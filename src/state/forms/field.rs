//! Focus targets of the estimate form

use crate::estimator::Field;

/// Something on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// One of the five inputs
    Input(Field),
    /// The action buttons row
    Buttons,
}

impl FocusTarget {
    /// The input under focus, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Input(field) => Some(*field),
            Self::Buttons => None,
        }
    }

    pub fn is_select(&self) -> bool {
        self.field().is_some_and(|f| f.is_select())
    }

    /// Whether typed characters go into this target
    pub fn accepts_text(&self) -> bool {
        self.field().is_some_and(|f| !f.is_select())
    }
}

//! Form input value objects

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five inputs of the estimate form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Brand,
    Category,
    OriginalPrice,
    WearLevel,
    AgeBracket,
}

impl Field {
    /// All fields in form order
    pub const ALL: [Field; 5] = [
        Field::Brand,
        Field::Category,
        Field::OriginalPrice,
        Field::WearLevel,
        Field::AgeBracket,
    ];

    /// Canonical field name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Category => "category",
            Self::OriginalPrice => "originalPrice",
            Self::WearLevel => "wearLevel",
            Self::AgeBracket => "ageBracket",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Category => "Category",
            Self::OriginalPrice => "Original Price ($)",
            Self::WearLevel => "Condition",
            Self::AgeBracket => "Age",
        }
    }

    /// Whether the field is a closed set of options rather than free text
    pub fn is_select(&self) -> bool {
        matches!(self, Self::WearLevel | Self::AgeBracket)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand" => Ok(Self::Brand),
            "category" => Ok(Self::Category),
            "originalPrice" | "original_price" => Ok(Self::OriginalPrice),
            "wearLevel" | "wear_level" | "clothingUse" => Ok(Self::WearLevel),
            "ageBracket" | "age_bracket" | "yearsOld" => Ok(Self::AgeBracket),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }
}

/// Rejected field update
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("'{value}' is not a valid option for {field}")]
    InvalidOption { field: Field, value: String },
}

/// A closed enumeration shown as a select input
pub trait SelectOption: Sized + Copy + PartialEq + 'static {
    /// Every option in display order
    const OPTIONS: &'static [Self];

    /// Human-readable label, also used in the prompt
    fn label(&self) -> &'static str;

    /// Compact identifier accepted when parsing
    fn key(&self) -> &'static str;

    fn position(&self) -> usize {
        Self::OPTIONS.iter().position(|o| o == self).unwrap_or(0)
    }

    /// Next option, wrapping around
    fn next(self) -> Self {
        Self::OPTIONS[(self.position() + 1) % Self::OPTIONS.len()]
    }

    /// Previous option, wrapping around
    fn prev(self) -> Self {
        let pos = self.position();
        if pos == 0 {
            Self::OPTIONS[Self::OPTIONS.len() - 1]
        } else {
            Self::OPTIONS[pos - 1]
        }
    }

    /// Match a label (case-insensitive) or key
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::OPTIONS
            .iter()
            .copied()
            .find(|o| o.label().eq_ignore_ascii_case(value) || o.key() == value)
    }
}

/// How worn the garment is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WearLevel {
    #[default]
    NotWorn,
    Light,
    Medium,
    Heavy,
}

impl SelectOption for WearLevel {
    const OPTIONS: &'static [Self] = &[Self::NotWorn, Self::Light, Self::Medium, Self::Heavy];

    fn label(&self) -> &'static str {
        match self {
            Self::NotWorn => "Not Worn",
            Self::Light => "Light Wear",
            Self::Medium => "Medium Wear",
            Self::Heavy => "Heavy Wear",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::NotWorn => "NotWorn",
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Heavy => "Heavy",
        }
    }
}

/// How long the garment has been owned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeBracket {
    #[default]
    UnderOneYear,
    OneToTwoYears,
    TwoToFourYears,
    OverFourYears,
}

impl SelectOption for AgeBracket {
    const OPTIONS: &'static [Self] = &[
        Self::UnderOneYear,
        Self::OneToTwoYears,
        Self::TwoToFourYears,
        Self::OverFourYears,
    ];

    fn label(&self) -> &'static str {
        match self {
            Self::UnderOneYear => "Less than 1 year",
            Self::OneToTwoYears => "1-2 years",
            Self::TwoToFourYears => "2-4 years",
            Self::OverFourYears => "4+ years",
        }
    }

    fn key(&self) -> &'static str {
        match self {
            Self::UnderOneYear => "<1y",
            Self::OneToTwoYears => "1-2y",
            Self::TwoToFourYears => "2-4y",
            Self::OverFourYears => "4+y",
        }
    }
}

/// Everything the user typed or selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub brand: String,
    pub category: String,
    pub original_price: String,
    pub wear_level: WearLevel,
    pub age_bracket: AgeBracket,
}

impl FormInput {
    /// Display value of a field (the option label for selects)
    pub fn display_value(&self, field: Field) -> &str {
        match field {
            Field::Brand => &self.brand,
            Field::Category => &self.category,
            Field::OriginalPrice => &self.original_price,
            Field::WearLevel => self.wear_level.label(),
            Field::AgeBracket => self.age_bracket.label(),
        }
    }

    /// Mutable text of a free-text field, `None` for selects
    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Brand => Some(&mut self.brand),
            Field::Category => Some(&mut self.category),
            Field::OriginalPrice => Some(&mut self.original_price),
            Field::WearLevel | Field::AgeBracket => None,
        }
    }

    /// Replace a field's value; select values are parsed from label or key
    pub(crate) fn set(&mut self, field: Field, value: &str) -> Result<(), FieldError> {
        let invalid = || FieldError::InvalidOption {
            field,
            value: value.to_string(),
        };
        match field {
            Field::WearLevel => self.wear_level = WearLevel::parse(value).ok_or_else(invalid)?,
            Field::AgeBracket => self.age_bracket = AgeBracket::parse(value).ok_or_else(invalid)?,
            _ => {
                if let Some(text) = self.text_mut(field) {
                    *text = value.to_string();
                }
            }
        }
        Ok(())
    }
}

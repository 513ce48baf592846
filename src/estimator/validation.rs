//! Field rules checked before any request is sent

use super::input::{Field, FormInput};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Field name to human-readable message, in form order
pub type ValidationErrors = BTreeMap<Field, String>;

/// Non-negative amount with an optional one- or two-digit fraction
static PRICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("price pattern compiles"));

/// Check every field rule; an empty map means the input can be submitted
pub fn validate(input: &FormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if input.brand.trim().is_empty() {
        errors.insert(Field::Brand, "Brand is required".to_string());
    }

    if input.category.trim().is_empty() {
        errors.insert(Field::Category, "Category is required".to_string());
    }

    if input.original_price.is_empty() {
        errors.insert(Field::OriginalPrice, "Original price is required".to_string());
    } else if !PRICE_PATTERN.is_match(&input.original_price) {
        errors.insert(
            Field::OriginalPrice,
            "Enter a price like 80 or 79.99".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> FormInput {
        FormInput {
            brand: "Nike".to_string(),
            category: "Hoodie".to_string(),
            original_price: "80".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_input_has_no_errors() {
        assert!(validate(&valid_input()).is_empty());
    }

    #[test]
    fn test_default_input_flags_all_text_fields() {
        let errors = validate(&FormInput::default());
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            vec![Field::Brand, Field::Category, Field::OriginalPrice]
        );
    }

    #[test]
    fn test_whitespace_brand_is_empty() {
        let input = FormInput {
            brand: "   ".to_string(),
            ..valid_input()
        };
        let errors = validate(&input);
        assert_eq!(errors.get(&Field::Brand).unwrap(), "Brand is required");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_whitespace_category_is_empty() {
        let input = FormInput {
            category: "\t".to_string(),
            ..valid_input()
        };
        assert!(validate(&input).contains_key(&Field::Category));
    }

    #[test]
    fn test_empty_price_message() {
        let input = FormInput {
            original_price: String::new(),
            ..valid_input()
        };
        assert_eq!(
            validate(&input).get(&Field::OriginalPrice).unwrap(),
            "Original price is required"
        );
    }

    #[test]
    fn test_accepted_prices() {
        for price in ["0", "80", "79.9", "79.99", "1000000"] {
            let input = FormInput {
                original_price: price.to_string(),
                ..valid_input()
            };
            assert!(validate(&input).is_empty(), "expected {price} to be accepted");
        }
    }

    #[test]
    fn test_rejected_prices() {
        for price in ["$80", "80.", ".5", "79.999", "-5", "abc", "8 0", " 80", "1,000", "٨٠"] {
            let input = FormInput {
                original_price: price.to_string(),
                ..valid_input()
            };
            assert_eq!(
                validate(&input).get(&Field::OriginalPrice).map(String::as_str),
                Some("Enter a price like 80 or 79.99"),
                "expected {price} to be rejected"
            );
        }
    }

    #[test]
    fn test_validate_is_deterministic() {
        let input = FormInput::default();
        assert_eq!(validate(&input), validate(&input));
    }
}

//! Prompt construction and reply post-processing

use super::input::{FormInput, SelectOption};

/// Interpolate the form into the estimation prompt
pub fn build_prompt(input: &FormInput) -> String {
    format!(
        "Estimate the resale value of a {} from {} that is {} and {} old. \
         The original price was ${}. \
         Output only the number amount you think it would cost.",
        input.category,
        input.brand,
        input.wear_level.label(),
        input.age_bracket.label(),
        input.original_price,
    )
}

/// Keep only ASCII digits and dots; an empty remainder becomes "0"
pub fn extract_price(reply: &str) -> String {
    let price: String = reply
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if price.is_empty() {
        "0".to_string()
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{AgeBracket, WearLevel};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_prompt_interpolates_all_fields() {
        let input = FormInput {
            brand: "Nike".to_string(),
            category: "Hoodie".to_string(),
            original_price: "80".to_string(),
            wear_level: WearLevel::Light,
            age_bracket: AgeBracket::OneToTwoYears,
        };
        assert_eq!(
            build_prompt(&input),
            "Estimate the resale value of a Hoodie from Nike that is Light Wear and 1-2 years old. \
             The original price was $80. \
             Output only the number amount you think it would cost."
        );
    }

    #[test]
    fn test_prompt_keeps_price_fraction() {
        let input = FormInput {
            brand: "Levi's".to_string(),
            category: "Jacket".to_string(),
            original_price: "120.50".to_string(),
            wear_level: WearLevel::Heavy,
            age_bracket: AgeBracket::OverFourYears,
        };
        let prompt = build_prompt(&input);
        assert!(prompt.contains("a Jacket from Levi's that is Heavy Wear and 4+ years old."));
        assert!(prompt.contains("$120.50."));
    }

    #[test]
    fn test_extract_strips_currency_and_words() {
        assert_eq!(extract_price("$45.00 approximately"), "45.00");
    }

    #[test]
    fn test_extract_no_digits_is_zero() {
        assert_eq!(extract_price("I cannot estimate"), "0");
        assert_eq!(extract_price(""), "0");
    }

    #[test]
    fn test_extract_plain_number() {
        assert_eq!(extract_price("32"), "32");
    }

    #[test]
    fn test_extract_keeps_every_dot() {
        // Sentence punctuation survives; the reply is not checked for plausibility.
        assert_eq!(extract_price("About $30."), "30.");
        assert_eq!(extract_price("1,250.5 USD"), "1250.5");
    }

    #[test]
    fn test_extract_ignores_non_ascii_digits() {
        assert_eq!(extract_price("٣٠"), "0");
    }
}

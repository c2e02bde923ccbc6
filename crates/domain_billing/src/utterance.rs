//! Voice-command parsing
//!
//! Turns a transcribed phrase such as `"1 kg rice"` into a quantity and a
//! product name. The grammar is:
//!
//! ```text
//! <utterance> ::= <digits> <ws>* <unit>? <ws>* <free-text>
//! <unit>      ::= kg | grams | g | ml | liters | l | unit | units
//! ```
//!
//! The unit word is optional and discarded, since transcription of unit
//! words is unreliable. A unit only counts when it is a whole word, so
//! `"1 lemon"` names a lemon rather than one litre of "emon".

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static UTTERANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([0-9]+)\s*(?:(?:kg|grams|g|ml|liters|l|units|unit)\b)?\s*(.*)$")
        .expect("utterance pattern is valid")
});

/// Reasons an utterance cannot be turned into a sale
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// No leading quantity
    #[error("Invalid voice format '{0}'. Try saying '1 kg rice'.")]
    MalformedUtterance(String),

    /// Quantity (and unit) present but nothing names the product
    #[error("Please specify a valid product name.")]
    EmptyProductName,
}

/// Parses an utterance into `(quantity, product_name)`
///
/// Matching is case-insensitive: the whole utterance is lower-cased first,
/// so the returned product name is lower case.
///
/// # Errors
///
/// - `MalformedUtterance` if the utterance does not start with digits, or
///   the digits do not fit a quantity
/// - `EmptyProductName` if nothing follows the quantity and unit
///
/// # Example
///
/// ```rust
/// use domain_billing::parse_utterance;
///
/// assert_eq!(parse_utterance("1 kg rice").unwrap(), (1, "rice".to_string()));
/// ```
pub fn parse_utterance(text: &str) -> Result<(u32, String), ParseError> {
    let normalized = text.trim().to_lowercase();

    let captures = UTTERANCE
        .captures(&normalized)
        .ok_or_else(|| ParseError::MalformedUtterance(normalized.clone()))?;

    let quantity = captures
        .get(1)
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| ParseError::MalformedUtterance(normalized.clone()))?;

    let product_name = captures
        .get(2)
        .map(|m| m.as_str().trim())
        .unwrap_or_default();

    if product_name.is_empty() {
        return Err(ParseError::EmptyProductName);
    }

    Ok((quantity, product_name.to_string()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const UNIT_WORDS: [&str; 8] = ["kg", "grams", "g", "ml", "liters", "l", "unit", "units"];

    proptest! {
        #[test]
        fn parses_generated_utterances(
            quantity in 1u32..10_000,
            unit in prop::sample::select(vec!["", "kg", "grams", "g", "ml", "liters", "l", "unit", "units"]),
            product in "[a-z]{3,12}( [a-z]{3,12})?"
        ) {
            // Without a spoken unit, a product whose first word is a unit word is read as that unit.
            let first_word = product.split(' ').next().unwrap_or_default();
            prop_assume!(!unit.is_empty() || !UNIT_WORDS.contains(&first_word));
            let text = format!("{} {} {}", quantity, unit, product);
            let (q, name) = parse_utterance(&text).unwrap();
            prop_assert_eq!(q, quantity);
            prop_assert_eq!(name, product);
        }

        #[test]
        fn text_without_leading_digit_is_malformed(text in "[a-z][a-z0-9 ]{0,20}") {
            prop_assert!(matches!(parse_utterance(&text), Err(ParseError::MalformedUtterance(_))));
        }
    }
}

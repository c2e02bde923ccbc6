//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use domain_billing::NewProduct;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Unit words the utterance grammar recognises
pub const UNIT_WORDS: &[&str] = &["kg", "grams", "g", "ml", "liters", "l", "unit", "units"];

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::INR),
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::JPY),
    ]
}

/// Strategy for non-negative unit prices with up to four decimal places
pub fn price_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64, 0u32..=4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for INR unit prices
pub fn inr_price_strategy() -> impl Strategy<Value = Money> {
    price_strategy().prop_map(|amount| Money::new(amount, Currency::INR))
}

/// Strategy for quantities on hand
pub fn stock_strategy() -> impl Strategy<Value = u32> {
    0u32..1_000u32
}

/// Strategy for sale quantities
pub fn sale_quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..1_000u32
}

/// Strategy for product names: lower-case words that are not unit words
pub fn product_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{2,10}", 1..3)
        .prop_filter("first word must not be a unit", |words| {
            !UNIT_WORDS.contains(&words[0].as_str())
        })
        .prop_map(|words| words.join(" "))
}

/// Strategy for an optional spoken unit
pub fn unit_word_strategy() -> impl Strategy<Value = Option<&'static str>> {
    prop::option::of(prop::sample::select(UNIT_WORDS))
}

/// Strategy for well-formed utterances with the quantity and name they encode
pub fn utterance_strategy() -> impl Strategy<Value = (String, u32, String)> {
    (1u32..100_000u32, unit_word_strategy(), product_name_strategy()).prop_map(
        |(quantity, unit, name)| {
            let text = match unit {
                Some(unit) => format!("{} {} {}", quantity, unit, name),
                None => format!("{} {}", quantity, name),
            };
            (text, quantity, name)
        },
    )
}

/// Strategy for INR products
pub fn new_product_strategy() -> impl Strategy<Value = NewProduct> {
    (product_name_strategy(), stock_strategy(), inr_price_strategy()).prop_map(
        |(name, quantity_on_hand, unit_price)| NewProduct {
            name,
            quantity_on_hand,
            unit_price,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_billing::parse_utterance;

    proptest! {
        #[test]
        fn test_generated_utterances_parse(
            (text, quantity, name) in utterance_strategy()
        ) {
            prop_assert_eq!(parse_utterance(&text).unwrap(), (quantity, name));
        }

        #[test]
        fn test_generated_prices_are_non_negative(price in inr_price_strategy()) {
            prop_assert!(!price.is_negative());
        }
    }
}

//! Validation of raw text fields from the display surface
//!
//! The display surface collects everything as text. These helpers turn the
//! text into typed requests before the engine is called, so a non-numeric
//! quantity is reported as an input problem and never reaches billing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use core_kernel::{Currency, Money};

/// Problems with operator-entered fields
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputValidationError {
    #[error("{field} is required")]
    MissingField { field: &'static str },

    #[error("Quantity must be a whole number, got '{0}'")]
    NonNumericQuantity(String),

    #[error("Quantity must be greater than zero")]
    NonPositiveQuantity,

    #[error("Price must be a number, got '{0}'")]
    NonNumericPrice(String),

    #[error("Price must not be negative")]
    NegativePrice,

    #[error("Price may have at most {} decimal places, got '{}'", MAX_PRICE_PLACES, .0)]
    TooPrecisePrice(String),
}

/// Finest price step an operator may enter
pub const MAX_PRICE_PLACES: u32 = 4;

/// A validated request to sell `quantity` units of `product_name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRequest {
    pub product_name: String,
    pub quantity: u32,
}

impl SaleRequest {
    /// Builds a request from already-typed values
    pub fn new(product_name: &str, quantity: u32) -> Result<Self, InputValidationError> {
        let product_name = required(product_name, "Product name")?;
        if quantity == 0 {
            return Err(InputValidationError::NonPositiveQuantity);
        }
        Ok(Self {
            product_name,
            quantity,
        })
    }

    /// Builds a request from the two billing text fields
    pub fn from_text(product_name: &str, quantity: &str) -> Result<Self, InputValidationError> {
        let product_name = required(product_name, "Product name")?;
        let quantity = required(quantity, "Quantity")?;
        let quantity = parse_count(&quantity)?;
        Self::new(&product_name, quantity)
    }
}

/// Parses a whole, non-negative count such as a stock quantity
pub fn parse_count(text: &str) -> Result<u32, InputValidationError> {
    let text = text.trim();
    match text.parse::<u32>() {
        Ok(value) => Ok(value),
        // "-3" is numeric, just not allowed
        Err(_) if text.parse::<i64>().is_ok() => Err(InputValidationError::NonPositiveQuantity),
        Err(_) => Err(InputValidationError::NonNumericQuantity(text.to_string())),
    }
}

/// Parses a non-negative unit price
///
/// The price is kept exactly as entered. Trailing zeros do not count towards
/// the decimal-place limit, so `"2.500000"` is accepted.
pub fn parse_price(text: &str, currency: Currency) -> Result<Money, InputValidationError> {
    let text = text.trim();
    let amount = Decimal::from_str(text)
        .map_err(|_| InputValidationError::NonNumericPrice(text.to_string()))?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InputValidationError::NegativePrice);
    }
    if amount.normalize().scale() > MAX_PRICE_PLACES {
        return Err(InputValidationError::TooPrecisePrice(text.to_string()));
    }
    Ok(Money::new(amount, currency))
}

/// Trims a field and rejects it when nothing is left
pub(crate) fn required(value: &str, field: &'static str) -> Result<String, InputValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_trims_fields() {
        let request = SaleRequest::from_text("  rice ", " 3 ").unwrap();
        assert_eq!(request.product_name, "rice");
        assert_eq!(request.quantity, 3);
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            SaleRequest::from_text("", "3"),
            Err(InputValidationError::MissingField { field: "Product name" })
        );
        assert_eq!(
            SaleRequest::from_text("rice", "   "),
            Err(InputValidationError::MissingField { field: "Quantity" })
        );
    }

    #[test]
    fn test_non_numeric_quantity() {
        assert_eq!(
            SaleRequest::from_text("rice", "three"),
            Err(InputValidationError::NonNumericQuantity("three".to_string()))
        );
        assert!(matches!(
            SaleRequest::from_text("rice", "1.5"),
            Err(InputValidationError::NonNumericQuantity(_))
        ));
    }

    #[test]
    fn test_zero_and_negative_quantity() {
        assert_eq!(
            SaleRequest::from_text("rice", "0"),
            Err(InputValidationError::NonPositiveQuantity)
        );
        assert_eq!(
            SaleRequest::from_text("rice", "-2"),
            Err(InputValidationError::NonPositiveQuantity)
        );
    }

    #[test]
    fn test_parse_price() {
        let price = parse_price("2.50", Currency::INR).unwrap();
        assert_eq!(price.to_string(), "₹2.50");
        assert_eq!(parse_price("-1", Currency::INR), Err(InputValidationError::NegativePrice));
        assert!(matches!(
            parse_price("cheap", Currency::INR),
            Err(InputValidationError::NonNumericPrice(_))
        ));
    }

    #[test]
    fn test_parse_price_keeps_entered_precision() {
        let price = parse_price("1.2345", Currency::INR).unwrap();
        assert_eq!(price.amount(), Decimal::new(12345, 4));
        assert_eq!(price.to_storage_string(), "1.2345");
        assert!(parse_price("2.500000", Currency::INR).is_ok());
    }

    #[test]
    fn test_parse_price_rejects_sub_step_prices() {
        for text in ["0.00005", "1.23456"] {
            assert_eq!(
                parse_price(text, Currency::INR),
                Err(InputValidationError::TooPrecisePrice(text.to_string()))
            );
        }
    }
}

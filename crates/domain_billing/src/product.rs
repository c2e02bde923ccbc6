//! Inventory products
//!
//! A product is created by the operator, decremented by billing and deleted
//! by the operator. Nothing else mutates it.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, MoneyError, ProductId};

use crate::input::{self, InputValidationError};

/// A product on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier
    pub id: ProductId,
    /// Lookup key for billing
    pub name: String,
    /// Units (or kg) available for sale
    pub quantity_on_hand: u32,
    /// Price per unit (or kg)
    pub unit_price: Money,
}

impl Product {
    /// Returns true if `quantity` can be sold without going negative
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        quantity <= self.quantity_on_hand
    }

    /// Price of `quantity` units at this product's unit price
    ///
    /// # Errors
    ///
    /// `MoneyError::Overflow` if the product does not fit in a `Decimal`
    pub fn line_total(&self, quantity: u32) -> Result<Money, MoneyError> {
        self.unit_price.times(quantity)
    }
}

/// A validated product that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub quantity_on_hand: u32,
    pub unit_price: Money,
}

impl NewProduct {
    /// Creates a product definition
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed name is empty or the price is negative
    pub fn new(
        name: &str,
        quantity_on_hand: u32,
        unit_price: Money,
    ) -> Result<Self, InputValidationError> {
        let name = input::required(name, "Name")?;
        if unit_price.is_negative() {
            return Err(InputValidationError::NegativePrice);
        }
        Ok(Self {
            name,
            quantity_on_hand,
            unit_price,
        })
    }

    /// Creates a product definition from the three add-product text fields
    pub fn from_text(
        name: &str,
        quantity: &str,
        price: &str,
        currency: Currency,
    ) -> Result<Self, InputValidationError> {
        let name = input::required(name, "Name")?;
        let quantity = input::parse_count(&input::required(quantity, "Quantity")?)?;
        let price = input::parse_price(&input::required(price, "Price")?, currency)?;
        Self::new(&name, quantity, price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rice() -> Product {
        Product {
            id: ProductId::new(1),
            name: "rice".to_string(),
            quantity_on_hand: 10,
            unit_price: Money::new(dec!(2.0), Currency::INR),
        }
    }

    #[test]
    fn test_has_stock_for() {
        let product = rice();
        assert!(product.has_stock_for(10));
        assert!(!product.has_stock_for(11));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(rice().line_total(3).unwrap().amount(), dec!(6.0));
    }

    #[test]
    fn test_new_product_trims_name() {
        let product = NewProduct::new("  dal ", 4, Money::new(dec!(1.5), Currency::INR)).unwrap();
        assert_eq!(product.name, "dal");
    }

    #[test]
    fn test_new_product_rejects_blank_name_and_negative_price() {
        let price = Money::new(dec!(1), Currency::INR);
        assert_eq!(
            NewProduct::new("  ", 1, price),
            Err(InputValidationError::MissingField { field: "Name" })
        );
        assert_eq!(
            NewProduct::new("salt", 1, Money::new(dec!(-1), Currency::INR)),
            Err(InputValidationError::NegativePrice)
        );
    }

    #[test]
    fn test_from_text() {
        let product = NewProduct::from_text("sugar", "25", "42.5", Currency::INR).unwrap();
        assert_eq!(product.quantity_on_hand, 25);
        assert_eq!(product.unit_price.amount(), dec!(42.5));

        assert!(matches!(
            NewProduct::from_text("sugar", "lots", "42.5", Currency::INR),
            Err(InputValidationError::NonNumericQuantity(_))
        ));
        assert_eq!(
            NewProduct::from_text("sugar", "5", "", Currency::INR),
            Err(InputValidationError::MissingField { field: "Price" })
        );
    }
}

//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{BillingLineId, Currency, Money, ProductId};
use domain_billing::{BillingLine, NewProduct, Product};
use rust_decimal::Decimal;

use crate::fixtures::MoneyFixtures;

/// Builder for constructing test products
pub struct TestProductBuilder {
    id: i64,
    name: String,
    quantity_on_hand: u32,
    unit_price: Money,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: 1,
            name: "rice".to_string(),
            quantity_on_hand: 10,
            unit_price: MoneyFixtures::inr_2(),
        }
    }

    /// Sets the product ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the product name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the quantity on hand
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity_on_hand = quantity;
        self
    }

    /// Sets the unit price in INR
    pub fn with_price(mut self, amount: Decimal) -> Self {
        self.unit_price = Money::new(amount, Currency::INR);
        self
    }

    /// Sets the unit price
    pub fn with_unit_price(mut self, price: Money) -> Self {
        self.unit_price = price;
        self
    }

    /// Builds the product as the store would return it
    pub fn build(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            quantity_on_hand: self.quantity_on_hand,
            unit_price: self.unit_price,
        }
    }

    /// Builds the creation request for the product
    pub fn build_new(self) -> NewProduct {
        NewProduct {
            name: self.name,
            quantity_on_hand: self.quantity_on_hand,
            unit_price: self.unit_price,
        }
    }
}

/// Builder for constructing test billing lines
pub struct TestBillingLineBuilder {
    id: i64,
    product_name: String,
    quantity: u32,
    unit_price: Money,
    total_override: Option<Money>,
}

impl Default for TestBillingLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBillingLineBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: 1,
            product_name: "rice".to_string(),
            quantity: 1,
            unit_price: MoneyFixtures::inr_2(),
            total_override: None,
        }
    }

    /// Sets the line ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the product name
    pub fn with_product(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the unit price in INR
    pub fn with_price(mut self, amount: Decimal) -> Self {
        self.unit_price = Money::new(amount, Currency::INR);
        self
    }

    /// Forces a stored total that disagrees with quantity * price
    pub fn with_inconsistent_total(mut self, total: Money) -> Self {
        self.total_override = Some(total);
        self
    }

    /// Builds the billing line
    pub fn build(self) -> BillingLine {
        let total_price = self
            .total_override
            .unwrap_or_else(|| {
                self.unit_price
                    .times(self.quantity)
                    .expect("builder line total out of range")
            });
        BillingLine {
            id: BillingLineId::new(self.id),
            product_name: self.product_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_builder_defaults() {
        let product = TestProductBuilder::new().build();
        assert_eq!(product.name, "rice");
        assert_eq!(product.quantity_on_hand, 10);
        assert_eq!(product.unit_price.amount(), dec!(2.00));
    }

    #[test]
    fn test_line_builder_computes_total() {
        let line = TestBillingLineBuilder::new()
            .with_quantity(3)
            .with_price(dec!(1.5))
            .build();
        assert_eq!(line.total_price.amount(), dec!(4.5));
        assert!(line.is_consistent());
    }

    #[test]
    fn test_line_builder_inconsistent_total() {
        let line = TestBillingLineBuilder::new()
            .with_inconsistent_total(MoneyFixtures::inr_zero())
            .build();
        assert!(!line.is_consistent());
    }
}

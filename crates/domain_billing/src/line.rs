//! Billing lines
//!
//! A billing line copies the product name and unit price at the moment of
//! sale, so it survives later deletion of the product. The total is stored
//! redundantly and never recomputed on read.

use serde::{Deserialize, Serialize};

use core_kernel::{BillingLineId, Money, MoneyError, ProductId};

use crate::product::Product;

/// One recorded sale on the current bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingLine {
    /// Sequential line number
    pub id: BillingLineId,
    /// Product name at time of sale
    pub product_name: String,
    /// Quantity sold
    pub quantity: u32,
    /// Unit price at time of sale
    pub unit_price: Money,
    /// `quantity * unit_price`
    pub total_price: Money,
}

impl BillingLine {
    /// Attaches the store-assigned id to a pending line
    pub fn from_new(id: BillingLineId, line: &NewBillingLine) -> Self {
        Self {
            id,
            product_name: line.product_name.clone(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            total_price: line.total_price,
        }
    }

    /// Checks the stored total against `quantity * unit_price`
    pub fn is_consistent(&self) -> bool {
        self.unit_price
            .times(self.quantity)
            .is_ok_and(|total| total == self.total_price)
    }
}

/// A sale that has passed validation and is ready to be written
///
/// Writing it inserts the line and decrements `product_id` by `quantity`
/// in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBillingLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub total_price: Money,
}

impl NewBillingLine {
    /// Prices a sale of `quantity` units of `product`
    pub fn for_sale(product: &Product, quantity: u32) -> Result<Self, MoneyError> {
        Ok(Self {
            product_id: product.id,
            product_name: product.name.clone(),
            quantity,
            unit_price: product.unit_price,
            total_price: product.line_total(quantity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_for_sale_copies_product_fields() {
        let product = Product {
            id: ProductId::new(3),
            name: "soap".to_string(),
            quantity_on_hand: 5,
            unit_price: Money::new(dec!(12.25), Currency::INR),
        };

        let pending = NewBillingLine::for_sale(&product, 2).unwrap();
        assert_eq!(pending.product_id, product.id);
        assert_eq!(pending.product_name, "soap");
        assert_eq!(pending.total_price.amount(), dec!(24.50));

        let line = BillingLine::from_new(BillingLineId::new(1), &pending);
        assert!(line.is_consistent());
    }

    #[test]
    fn test_inconsistent_line_detected() {
        let line = BillingLine {
            id: BillingLineId::new(1),
            product_name: "soap".to_string(),
            quantity: 2,
            unit_price: Money::new(dec!(1), Currency::INR),
            total_price: Money::new(dec!(3), Currency::INR),
        };
        assert!(!line.is_consistent());
    }

    #[test]
    fn test_for_sale_rejects_overflowing_total() {
        let product = Product {
            id: ProductId::new(9),
            name: "gold".to_string(),
            quantity_on_hand: 10,
            unit_price: Money::new(rust_decimal::Decimal::MAX, Currency::INR),
        };
        assert!(matches!(
            NewBillingLine::for_sale(&product, 2),
            Err(MoneyError::Overflow(_))
        ));
    }
}

//! Running total of the current bill

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Currency, Money, MoneyError};

use crate::line::BillingLine;

/// Sum of `total_price` over every line on the current bill
///
/// Always rebuilt from the full line list rather than maintained
/// incrementally, so it cannot drift from what is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTotal {
    pub amount: Money,
    pub line_count: usize,
}

impl RunningTotal {
    /// An empty bill
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Money::zero(currency),
            line_count: 0,
        }
    }

    /// Sums the stored totals of `lines`
    pub fn from_lines(lines: &[BillingLine], currency: Currency) -> Result<Self, MoneyError> {
        let amount = Money::sum(lines.iter().map(|line| &line.total_price), currency)?;
        Ok(Self {
            amount,
            line_count: lines.len(),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for RunningTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Bill: {}", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::BillingLineId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn line(id: i64, quantity: u32, price: Decimal) -> BillingLine {
        let unit_price = Money::new(price, Currency::INR);
        BillingLine {
            id: BillingLineId::new(id),
            product_name: format!("item-{}", id),
            quantity,
            unit_price,
            total_price: unit_price.times(quantity).unwrap(),
        }
    }

    #[test]
    fn test_empty_bill() {
        let total = RunningTotal::from_lines(&[], Currency::INR).unwrap();
        assert!(total.is_zero());
        assert_eq!(total, RunningTotal::zero(Currency::INR));
        assert_eq!(total.to_string(), "Total Bill: ₹0.00");
    }

    #[test]
    fn test_sums_stored_totals() {
        let lines = vec![line(1, 3, dec!(2.0)), line(2, 1, dec!(0.1)), line(3, 2, dec!(0.1))];
        let total = RunningTotal::from_lines(&lines, Currency::INR).unwrap();
        assert_eq!(total.amount.amount(), dec!(6.3));
        assert_eq!(total.line_count, 3);
        assert_eq!(total.to_string(), "Total Bill: ₹6.30");
    }

    #[test]
    fn test_uses_stored_total_not_recomputed() {
        let mut odd = line(1, 1, dec!(5));
        odd.total_price = Money::new(dec!(4), Currency::INR);
        let total = RunningTotal::from_lines(&[odd], Currency::INR).unwrap();
        assert_eq!(total.amount.amount(), dec!(4));
    }
}

//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_billing::{BillingEngine, BillingLine, RunningTotal};
use rust_decimal::Decimal;

/// Asserts that a Money value has exactly the given amount
pub fn assert_money_eq(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Money amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that a line's stored total is quantity times unit price
pub fn assert_line_consistent(line: &BillingLine) {
    assert!(
        line.is_consistent(),
        "Line {} is inconsistent: {} x {} != {}",
        line.id,
        line.quantity,
        line.unit_price,
        line.total_price
    );
}

/// Asserts that a running total is the exact sum of the lines
pub fn assert_total_matches_lines(total: &RunningTotal, lines: &[BillingLine]) {
    let expected: Decimal = lines.iter().map(|l| l.total_price.amount()).sum();
    assert_eq!(
        total.amount.amount(),
        expected,
        "Running total {} does not match the sum of {} lines ({})",
        total.amount,
        lines.len(),
        expected
    );
    assert_eq!(total.line_count, lines.len());
}

/// Asserts the quantity on hand of the product called `name`
///
/// # Panics
///
/// Panics if the product does not exist or the quantity differs
pub async fn assert_stock(engine: &BillingEngine, name: &str, expected: u32) {
    let products = engine.list_products().await.expect("list products");
    let product = products
        .iter()
        .find(|p| p.name == name)
        .unwrap_or_else(|| panic!("Product '{}' not found", name));
    assert_eq!(
        product.quantity_on_hand, expected,
        "Stock of '{}' is {}, expected {}",
        name, product.quantity_on_hand, expected
    );
}

/// Asserts that the current bill has `expected` lines
pub async fn assert_line_count(engine: &BillingEngine, expected: usize) {
    let lines = engine.list_billing_lines().await.expect("list billing lines");
    assert_eq!(
        lines.len(),
        expected,
        "Expected {} billing lines, found {}",
        expected,
        lines.len()
    );
}

/// Asserts that the bill is empty and totals zero
pub async fn assert_bill_empty(engine: &BillingEngine) {
    assert_line_count(engine, 0).await;
    let total = engine.running_total().await.expect("running total");
    assert_money_zero(&total.amount);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::TestBillingLineBuilder;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_total_matches_lines() {
        let lines = vec![
            TestBillingLineBuilder::new().with_id(1).with_quantity(3).build(),
            TestBillingLineBuilder::new().with_id(2).with_price(dec!(0.1)).build(),
        ];
        let total = RunningTotal::from_lines(&lines, Currency::INR).unwrap();
        assert_total_matches_lines(&total, &lines);
        assert_money_eq(&total.amount, dec!(6.1));
    }

    #[test]
    #[should_panic(expected = "inconsistent")]
    fn test_inconsistent_line_panics() {
        let line = TestBillingLineBuilder::new()
            .with_inconsistent_total(Money::new(dec!(99), Currency::INR))
            .build();
        assert_line_consistent(&line);
    }
}

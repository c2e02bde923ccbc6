//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the point-of-sale system.
//! These fixtures are designed to be consistent and predictable for unit tests.

use core_kernel::{Currency, Money};
use domain_billing::NewProduct;
use rust_decimal_macros::dec;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Price of a kilogram of rice
    pub fn inr_2() -> Money {
        Money::new(dec!(2.00), Currency::INR)
    }

    /// A price with paise
    pub fn inr_12_25() -> Money {
        Money::new(dec!(12.25), Currency::INR)
    }

    /// A price that is not exact in binary floating point
    pub fn inr_0_10() -> Money {
        Money::new(dec!(0.10), Currency::INR)
    }

    /// Creates a zero amount
    pub fn inr_zero() -> Money {
        Money::zero(Currency::INR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_1() -> Money {
        Money::new(dec!(1.00), Currency::USD)
    }
}

/// Fixture for inventory test data
pub struct ProductFixtures;

impl ProductFixtures {
    /// 10 kg of rice at 2.00 each
    pub fn rice() -> NewProduct {
        Self::new_product("rice", 10, MoneyFixtures::inr_2())
    }

    /// 5 bars of soap at 12.25 each
    pub fn soap() -> NewProduct {
        Self::new_product("soap", 5, MoneyFixtures::inr_12_25())
    }

    /// 100 sachets of salt at 0.10 each
    pub fn salt() -> NewProduct {
        Self::new_product("salt", 100, MoneyFixtures::inr_0_10())
    }

    /// A product with nothing on hand
    pub fn sold_out() -> NewProduct {
        Self::new_product("saffron", 0, Money::new(dec!(450), Currency::INR))
    }

    fn new_product(name: &str, quantity: u32, price: Money) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            quantity_on_hand: quantity,
            unit_price: price,
        }
    }
}

/// Fixture for spoken phrases
pub struct UtteranceFixtures;

impl UtteranceFixtures {
    /// Phrases with the quantity and product they parse to
    pub fn valid() -> Vec<(&'static str, u32, &'static str)> {
        vec![
            ("1 kg rice", 1, "rice"),
            ("2 units soap", 2, "soap"),
            ("500 grams dal", 500, "dal"),
            ("3 l milk", 3, "milk"),
            ("1 lemon", 1, "lemon"),
            ("  4   KG   Basmati Rice  ", 4, "basmati rice"),
        ]
    }

    /// Phrases that do not start with a quantity
    pub fn malformed() -> Vec<&'static str> {
        vec!["rice", "", "   ", "kg 2 rice", "two kg rice", "-1 kg rice"]
    }

    /// Phrases with a quantity but no product
    pub fn without_product() -> Vec<&'static str> {
        vec!["3", "3 kg", "7 units  "]
    }
}

/// Fixture for audio payloads
pub struct AudioFixtures;

impl AudioFixtures {
    /// Bytes standing in for a short WAV recording
    pub fn wav() -> Vec<u8> {
        let mut bytes = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
        bytes.extend_from_slice(&[0u8; 32]);
        bytes
    }
}

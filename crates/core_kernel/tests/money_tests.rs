//! Unit tests for the Money module
//!
//! Covers creation, parsing from persisted text, line-total multiplication,
//! summation and display formatting.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(100.50), Currency::INR);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::INR);
    }

    #[test]
    fn test_new_keeps_full_precision() {
        let m = Money::new(dec!(0.00005), Currency::INR);
        assert_eq!(m.amount(), dec!(0.00005));
        assert!(!m.is_zero());
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_parse_accepts_persisted_text() {
        let m = Money::parse("2.5", Currency::INR).unwrap();
        assert_eq!(m.amount(), dec!(2.50));
    }

    #[test]
    fn test_parse_does_not_round() {
        let m = Money::parse("1.23456", Currency::INR).unwrap();
        assert_eq!(m.amount(), dec!(1.23456));
        assert_eq!(m.to_storage_string(), "1.23456");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let result = Money::parse("two rupees", Currency::INR);
        assert!(matches!(result, Err(MoneyError::InvalidAmount(_))));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_times_multiplies_by_quantity() {
        let price = Money::new(dec!(2.0), Currency::INR);
        assert_eq!(price.times(3).unwrap().amount(), dec!(6.0));
    }

    #[test]
    fn test_times_zero_is_zero() {
        let price = Money::new(dec!(19.99), Currency::INR);
        assert!(price.times(0).unwrap().is_zero());
    }

    #[test]
    fn test_sum_of_lines() {
        let lines = [
            Money::new(dec!(6.00), Currency::INR),
            Money::new(dec!(0.10), Currency::INR),
            Money::new(dec!(0.20), Currency::INR),
        ];
        let total = Money::sum(lines.iter(), Currency::INR).unwrap();
        assert_eq!(total.amount(), dec!(6.30));
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total = Money::sum(std::iter::empty(), Currency::INR).unwrap();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_rejects_mixed_currencies() {
        let lines = [
            Money::new(dec!(1), Currency::INR),
            Money::new(dec!(1), Currency::USD),
        ];
        let result = Money::sum(lines.iter(), Currency::INR);
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch(_, _))));
    }

    #[test]
    fn test_times_reports_overflow() {
        let price = Money::parse("50000000000000000000000000000", Currency::INR).unwrap();
        assert!(matches!(price.times(2), Err(MoneyError::Overflow(_))));
    }

    #[test]
    fn test_sum_reports_overflow() {
        let line = Money::parse("40000000000000000000000000000", Currency::INR).unwrap();
        let result = Money::sum([line, line].iter(), Currency::INR);
        assert!(matches!(result, Err(MoneyError::Overflow(_))));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_parse_currency_code_case_insensitive() {
        assert_eq!("inr".parse::<Currency>().unwrap(), Currency::INR);
        assert_eq!(" USD ".parse::<Currency>().unwrap(), Currency::USD);
    }

    #[test]
    fn test_unknown_currency_code() {
        let result = "XYZ".parse::<Currency>();
        assert!(matches!(result, Err(MoneyError::UnknownCurrency(_))));
    }

    #[test]
    fn test_default_currency_is_rupee() {
        assert_eq!(Currency::default(), Currency::INR);
        assert_eq!(Currency::default().symbol(), "₹");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_two_places() {
        assert_eq!(Money::new(dec!(6), Currency::INR).to_string(), "₹6.00");
        assert_eq!(Money::new(dec!(12.346), Currency::USD).to_string(), "$12.35");
    }

    #[test]
    fn test_display_jpy_no_places() {
        assert_eq!(Money::new(dec!(500), Currency::JPY).to_string(), "¥500");
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::new(dec!(1.2349), Currency::INR).round_to_currency();
        assert_eq!(m.amount(), dec!(1.23));
    }
}

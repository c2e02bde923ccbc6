//! Unit tests for the Identifiers module

use core_kernel::{ProductId, BillingLineId};

mod product_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(ProductId::prefix(), "PRD");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(ProductId::new(12).to_string(), "PRD-12");
    }

    #[test]
    fn test_from_str_with_prefix() {
        let parsed: ProductId = "PRD-5".parse().unwrap();
        assert_eq!(parsed.value(), 5);
    }

    #[test]
    fn test_from_str_invalid() {
        assert!("PRD-five".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_i64_round_trip() {
        let id = ProductId::from(9);
        let raw: i64 = id.into();
        assert_eq!(raw, 9);
    }
}

mod billing_line_id_tests {
    use super::*;

    #[test]
    fn test_sequential_ids_order() {
        assert!(BillingLineId::new(1) < BillingLineId::new(2));
    }

    #[test]
    fn test_serde_transparent() {
        let id: BillingLineId = serde_json::from_str("17").unwrap();
        assert_eq!(id, BillingLineId::new(17));
    }
}

//! Strongly-typed identifiers for domain entities
//!
//! Rows are keyed by store-assigned sequential integers. Newtype wrappers keep
//! a product id from being passed where a billing line id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a store-assigned row id
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw row id
            pub fn value(&self) -> i64 {
                self.0
            }

            /// Returns the identifier prefix for display
            pub fn prefix() -> &'static str {
                $prefix
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let raw = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(raw.parse()?))
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> i64 {
                id.0
            }
        }
    };
}

// Inventory
define_id!(ProductId, "PRD");

// Billing
define_id!(BillingLineId, "BL");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new(7);
        assert_eq!(id.to_string(), "PRD-7");
    }

    #[test]
    fn test_id_parsing_with_and_without_prefix() {
        let original = BillingLineId::new(42);
        let parsed: BillingLineId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);

        let bare: BillingLineId = "42".parse().unwrap();
        assert_eq!(bare, original);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}

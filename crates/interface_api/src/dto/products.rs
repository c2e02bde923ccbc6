//! Product DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_billing::Product;

use super::FieldValue;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub name: String,
    #[serde(default)]
    pub quantity: FieldValue,
    #[serde(default)]
    pub price: FieldValue,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity_on_hand: u32,
    pub unit_price: Decimal,
    pub unit_price_display: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            unit_price: product.unit_price.amount(),
            unit_price_display: product.unit_price.to_string(),
            quantity_on_hand: product.quantity_on_hand,
            name: product.name,
        }
    }
}

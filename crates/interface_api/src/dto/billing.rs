//! Billing DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_billing::{BillCompletion, BillingLine, RunningTotal, VoiceSale};

use super::FieldValue;

#[derive(Debug, Deserialize, Validate)]
pub struct AddBillingLineRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub product_name: String,
    #[serde(default)]
    pub quantity: FieldValue,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VoiceRequest {
    #[validate(length(min = 1, max = 500, message = "must be between 1 and 500 characters"))]
    pub utterance: String,
}

#[derive(Debug, Serialize)]
pub struct BillingLineResponse {
    pub id: i64,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub total_price_display: String,
}

impl From<BillingLine> for BillingLineResponse {
    fn from(line: BillingLine) -> Self {
        Self {
            id: line.id.value(),
            quantity: line.quantity,
            unit_price: line.unit_price.amount(),
            total_price: line.total_price.amount(),
            total_price_display: line.total_price.to_string(),
            product_name: line.product_name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub amount: Decimal,
    pub currency: String,
    pub line_count: usize,
    pub display: String,
}

impl From<RunningTotal> for TotalResponse {
    fn from(total: RunningTotal) -> Self {
        Self {
            amount: total.amount.amount(),
            currency: total.amount.currency().code().to_string(),
            line_count: total.line_count,
            display: total.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BillingResponse {
    pub lines: Vec<BillingLineResponse>,
    pub total: TotalResponse,
}

#[derive(Debug, Serialize)]
pub struct VoiceBillingResponse {
    pub transcript: String,
    pub line: BillingLineResponse,
}

impl From<VoiceSale> for VoiceBillingResponse {
    fn from(sale: VoiceSale) -> Self {
        Self {
            transcript: sale.transcript,
            line: sale.line.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompleteBillResponse {
    pub lines_cleared: u64,
    pub total: TotalResponse,
    pub message: String,
}

impl From<BillCompletion> for CompleteBillResponse {
    fn from(completion: BillCompletion) -> Self {
        Self {
            lines_cleared: completion.lines_cleared,
            total: completion.total.into(),
            message: "Bill completed. New billing session started.".to_string(),
        }
    }
}

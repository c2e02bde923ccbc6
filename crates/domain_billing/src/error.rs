//! Billing domain errors

use thiserror::Error;

use core_kernel::{MoneyError, PortError};

use crate::input::InputValidationError;
use crate::utterance::ParseError;
use crate::voice::RecognitionFailure;

/// Errors that can occur in the billing domain
///
/// Every variant is reported to the operator as-is; none are retried and a
/// failed operation leaves the store unchanged.
#[derive(Debug, Error)]
pub enum BillingError {
    /// Missing or malformed operator input
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputValidationError),

    /// No product with the given name or id
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Requested quantity exceeds the quantity on hand
    #[error("Not enough stock for '{product}': requested {requested}, available {available}")]
    InsufficientStock {
        product: String,
        requested: u32,
        available: u32,
    },

    /// A product with the same name already exists
    #[error("Product already exists: {0}")]
    DuplicateProduct(String),

    /// The utterance did not match the voice-command grammar
    #[error(transparent)]
    Utterance(#[from] ParseError),

    /// Speech could not be turned into text
    #[error("Speech recognition failed: {0}")]
    Recognition(#[from] RecognitionFailure),

    /// The store could not be read or written
    #[error("Persistence error: {0}")]
    Persistence(#[from] PortError),

    /// Money arithmetic failed
    #[error("Calculation error: {0}")]
    Calculation(#[from] MoneyError),
}

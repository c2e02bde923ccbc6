//! Billing handlers

use axum::{body::Bytes, extract::State, http::StatusCode, Json};
use validator::Validate;

use domain_billing::{BillingError, RunningTotal, SaleRequest};

use crate::{AppState, error::ApiError};
use crate::dto::billing::*;

/// Lists the current bill with its running total
pub async fn get_billing(
    State(state): State<AppState>,
) -> Result<Json<BillingResponse>, ApiError> {
    let lines = state.engine.list_billing_lines().await?;
    let total = RunningTotal::from_lines(&lines, state.engine.currency())
        .map_err(BillingError::from)?;

    Ok(Json(BillingResponse {
        lines: lines.into_iter().map(BillingLineResponse::from).collect(),
        total: total.into(),
    }))
}

/// Adds a billing line from the product name and quantity fields
pub async fn add_billing_line(
    State(state): State<AppState>,
    Json(request): Json<AddBillingLineRequest>,
) -> Result<(StatusCode, Json<BillingLineResponse>), ApiError> {
    request.validate()?;

    let sale = SaleRequest::from_text(&request.product_name, &request.quantity.as_text())
        .map_err(BillingError::from)?;
    let line = state.engine.submit_request(&sale).await?;

    Ok((StatusCode::CREATED, Json(line.into())))
}

/// Adds a billing line from an already transcribed phrase
pub async fn add_by_utterance(
    State(state): State<AppState>,
    Json(request): Json<VoiceRequest>,
) -> Result<(StatusCode, Json<VoiceBillingResponse>), ApiError> {
    request.validate()?;

    let line = state.engine.submit_utterance(&request.utterance).await?;
    Ok((
        StatusCode::CREATED,
        Json(VoiceBillingResponse {
            transcript: request.utterance.trim().to_lowercase(),
            line: line.into(),
        }),
    ))
}

/// Adds a billing line from recorded audio
pub async fn add_by_audio(
    State(state): State<AppState>,
    audio: Bytes,
) -> Result<(StatusCode, Json<VoiceBillingResponse>), ApiError> {
    if audio.is_empty() {
        return Err(ApiError::BadRequest("Audio body is empty".to_string()));
    }

    let sale = state.engine.submit_voice(&audio).await?;
    Ok((StatusCode::CREATED, Json(sale.into())))
}

/// Returns the running total
pub async fn get_total(
    State(state): State<AppState>,
) -> Result<Json<TotalResponse>, ApiError> {
    Ok(Json(state.engine.running_total().await?.into()))
}

/// Completes the bill and starts a new one
pub async fn complete_bill(
    State(state): State<AppState>,
) -> Result<Json<CompleteBillResponse>, ApiError> {
    Ok(Json(state.engine.complete_bill().await?.into()))
}

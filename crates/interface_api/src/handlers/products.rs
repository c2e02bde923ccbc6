//! Product handlers

use axum::{extract::{Path, State}, http::StatusCode, Json};
use validator::Validate;

use core_kernel::ProductId;
use domain_billing::NewProduct;

use crate::{AppState, error::ApiError};
use crate::dto::products::*;

/// Lists products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let products = state.engine.list_products().await?;
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Adds a product to the inventory
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    request.validate()?;

    let product = NewProduct::from_text(
        &request.name,
        &request.quantity.as_text(),
        &request.price.as_text(),
        state.engine.currency(),
    )
    .map_err(domain_billing::BillingError::from)?;

    let created = state.engine.add_product(product).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Deletes a product
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.engine.delete_product(ProductId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

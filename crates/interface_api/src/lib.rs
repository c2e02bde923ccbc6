//! HTTP API Layer
//!
//! This crate provides the display surface for the point-of-sale billing core
//! using Axum. Every mutation goes through the `BillingEngine`; a front-end
//! re-reads the product list, the bill and the total after each call.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for products, billing and health
//! - **Middleware**: Tracing and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(engine);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, delete},
    middleware as axum_middleware,
};
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use domain_billing::BillingEngine;

use crate::middleware::request_log_middleware;
use crate::handlers::{billing, health, products};

/// Largest accepted audio upload
const MAX_AUDIO_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: BillingEngine,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `engine` - Billing engine wired to a store and optional transcriber
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(engine: BillingEngine) -> Router {
    let state = AppState { engine };

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Inventory routes
    let product_routes = Router::new()
        .route("/", get(products::list_products).post(products::create_product))
        .route("/:id", delete(products::delete_product));

    // Billing routes
    let billing_routes = Router::new()
        .route("/", get(billing::get_billing).post(billing::add_billing_line))
        .route("/voice", post(billing::add_by_utterance))
        .route(
            "/audio",
            post(billing::add_by_audio).layer(DefaultBodyLimit::max(MAX_AUDIO_BYTES)),
        )
        .route("/total", get(billing::get_total))
        .route("/complete", post(billing::complete_bill));

    let api_routes = Router::new()
        .nest("/products", product_routes)
        .nest("/billing", billing_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

// HTTP routes configuration

use crate::core::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_file_storage_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.upload.max_body_bytes;

    Router::new()
        .route(
            "/upload",
            post(crate::handlers::upload::upload_handler)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/health", get(crate::handlers::health::health_handler))
        .fallback(crate::handlers::fallback::fallback_handler)
        .with_state(state)
}

pub fn build_payment_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/v1/payments/invoices",
            post(crate::handlers::invoices::create_invoice_handler),
        )
        .route("/health", get(crate::handlers::health::health_handler))
        .fallback(crate::handlers::fallback::fallback_handler)
        .with_state(state)
}

use crate::core::error::error_response;
use axum::{
    http::{StatusCode, Uri},
    response::Response,
};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");
    error_response(StatusCode::NOT_FOUND, "Not found")
}

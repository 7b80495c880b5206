// Centralized error handling for the services

use crate::models::response::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors that can occur while accepting an upload
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Invalid multipart request: {0}")]
    InvalidMultipart(String),

    #[error("Upload exceeds the maximum request size")]
    PayloadTooLarge,
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            UploadError::MissingFile => StatusCode::BAD_REQUEST,
            UploadError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            UploadError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        };

        error_response(status, self.to_string())
    }
}

/// Errors that can occur while issuing an invoice
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid invoice request: {0}")]
    InvalidBody(String),
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let status = match &self {
            PaymentError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        };

        error_response(status, self.to_string())
    }
}

/// Violations of the user record's invariants
#[derive(Error, Debug, PartialEq, Eq)]
pub enum UserError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid role '{0}'. Must be one of: pilot, shop_manager, technician, admin")]
    InvalidRole(String),
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = Body::new(response.into_body()).collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_file_is_bad_request() {
        let response = UploadError::MissingFile.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "No file uploaded");
    }

    #[tokio::test]
    async fn test_payload_too_large_status() {
        let response = UploadError::PayloadTooLarge.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_invalid_invoice_body_is_bad_request() {
        let response = PaymentError::InvalidBody("missing field `currency`".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains("currency"));
    }

    #[test]
    fn test_user_error_messages() {
        let err = UserError::DuplicateEmail("a@b.c".to_string());
        assert_eq!(err.to_string(), "Email already registered: a@b.c");

        let err = UserError::InvalidRole("mechanic".to_string());
        assert!(err.to_string().starts_with("Invalid role 'mechanic'"));
    }
}

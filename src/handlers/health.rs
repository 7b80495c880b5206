use crate::core::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: i64,
}

/// Health check handler
///
/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            service: state.service.name().to_string(),
            timestamp: Utc::now().timestamp(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Config, Service};
    use axum::body::Body;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_health_handler() {
        let state = Arc::new(AppState::new(Service::Payment, Config::default()));
        let response = health_handler(State(state)).await.into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_response_names_service() {
        let state = Arc::new(AppState::new(Service::FileStorage, Config::default()));
        let response = health_handler(State(state)).await.into_response();

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, StatusCode::OK);

        let bytes = Body::new(body).collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.service, "file-storage");
        assert!(health.timestamp > 0);
    }
}

use crate::core::error::UploadError;
use crate::core::state::AppState;
use crate::models::upload::UploadResponse;
use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Accept a single uploaded file
///
/// POST /upload (multipart/form-data)
///
/// The first part carrying a non-empty filename is the file; any other part
/// before it is skipped and anything after it is ignored.
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, UploadError> {
    let mut multipart = multipart.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected non-multipart upload");
        UploadError::InvalidMultipart(rejection.body_text())
    })?;

    while let Some(field) = multipart.next_field().await.map_err(map_multipart_error)? {
        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                debug!(field = ?field.name(), "Skipping non-file multipart field");
                continue;
            }
        };

        let data = field.bytes().await.map_err(map_multipart_error)?;

        let id = Uuid::new_v4().to_string();
        let url = format!(
            "{}/{}",
            state.config.upload.public_base_path.trim_end_matches('/'),
            id
        );

        info!(
            file_id = %id,
            filename = %filename,
            bytes = data.len(),
            "File uploaded"
        );

        return Ok(Json(UploadResponse { id, filename, url }));
    }

    warn!("Upload request contained no file");
    Err(UploadError::MissingFile)
}

fn map_multipart_error(err: MultipartError) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        warn!(error = %err, "Upload exceeded body limit");
        return UploadError::PayloadTooLarge;
    }

    warn!(error = %err, "Failed to read multipart body");
    UploadError::InvalidMultipart(err.body_text())
}

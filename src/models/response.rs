use serde::{Deserialize, Serialize};

/// Body of every error reply
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

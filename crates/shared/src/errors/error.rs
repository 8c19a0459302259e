use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape shared by every error response: a single `error` string.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

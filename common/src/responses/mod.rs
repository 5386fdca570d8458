use serde::{Deserialize, Serialize};

/// JSON envelope returned by every upload endpoint.
///
/// Success carries `message` (and `skipped` when some rows were rejected during
/// validation); failures carry `error` and, where there is something to list,
/// one `details` entry per affected row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<Vec<String>>,
}

impl UploadResponse {
    pub fn success(message: impl Into<String>, skipped: Vec<String>) -> Self {
        UploadResponse {
            success: true,
            message: Some(message.into()),
            error: None,
            details: None,
            skipped: (!skipped.is_empty()).then_some(skipped),
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<Vec<String>>) -> Self {
        UploadResponse {
            success: false,
            message: None,
            error: Some(error.into()),
            details,
            skipped: None,
        }
    }
}

/// Error body of the read and dashboard endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

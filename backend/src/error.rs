//! Error types of the backend.
//!
//! Only `UploadError` ever reaches an HTTP response. Row-level failures
//! (`RowError`) are rendered to strings by the batch processor and travel as
//! data; store failures during the per-row fallback are handled the same way.

use actix_multipart::MultipartError;
use thiserror::Error;

/// Request-level failures of an upload. Each one ends the request.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("File exceeds the upload limit of {limit} bytes")]
    FileTooLarge { limit: usize },

    #[error("CSV format is invalid or empty")]
    EmptyOrMalformedTable,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("No valid data found")]
    NoValidData(Vec<String>),

    #[error("Failed to read upload: {0}")]
    Multipart(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Upload task failed: {0}")]
    Task(String),
}

impl UploadError {
    /// Whether the failure was caused by the uploaded content rather than the server.
    pub fn is_bad_input(&self) -> bool {
        !matches!(self, UploadError::Store(_) | UploadError::Task(_))
    }
}

impl From<MultipartError> for UploadError {
    fn from(err: MultipartError) -> Self {
        UploadError::Multipart(err.to_string())
    }
}

/// Why a single CSV row was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("Row validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Malformed CSV record: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("bulk insert of {count} records failed: {source}")]
    BulkInsert {
        count: usize,
        source: rusqlite::Error,
    },

    #[error("{source}")]
    SingleInsert {
        id: String,
        source: rusqlite::Error,
    },

    #[error("database connection lock poisoned")]
    Poisoned,

    #[error("store task failed: {0}")]
    Task(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Invalid value '{value}' for {var}")]
    Env { var: &'static str, value: String },
}

//! Error types for agsdump crates.

use thiserror::Error;

/// Result type alias using AgsError.
pub type AgsResult<T> = Result<T, AgsError>;

/// Primary error type for dumping an ArcGIS service.
#[derive(Debug, Error)]
pub enum AgsError {
    // === Transport Errors ===
    #[error("HTTP request failed for {url}: {message}")]
    Http { url: String, message: String },

    #[error("ArcGIS service returned error {code}: {message}")]
    Service { code: i64, message: String },

    // === Parse Errors ===
    #[error("Invalid JSON: {0}")]
    Json(String),

    #[error("Invalid icon payload: {0}")]
    IconDecode(String),

    // === Output Errors ===
    #[error("Filesystem error: {0}")]
    Io(String),

    #[error("Failed to write SLD document: {0}")]
    Sld(String),
}

impl AgsError {
    /// Build an HTTP error for the given URL.
    pub fn http(url: impl Into<String>, message: impl ToString) -> Self {
        AgsError::Http {
            url: url.into(),
            message: message.to_string(),
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for AgsError {
    fn from(err: std::io::Error) -> Self {
        AgsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AgsError {
    fn from(err: serde_json::Error) -> Self {
        AgsError::Json(err.to_string())
    }
}

impl From<base64::DecodeError> for AgsError {
    fn from(err: base64::DecodeError) -> Self {
        AgsError::IconDecode(err.to_string())
    }
}

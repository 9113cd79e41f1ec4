//! Error types for TextRazor client.

use thiserror::Error;

/// Result type for TextRazor client operations.
pub type Result<T> = std::result::Result<T, TextRazorError>;

/// TextRazor client errors.
#[derive(Debug, Error)]
pub enum TextRazorError {
    /// Configuration error (missing API key, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Key rejected by the service (HTTP 401/403)
    #[error("Authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    /// API error (non-2xx response, or `ok: false` in the body)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl TextRazorError {
    /// Whether the failure was caused by the API key.
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

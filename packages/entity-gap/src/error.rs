//! Typed errors for the entity gap library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! a degraded URL apart from a run that never started.

use thiserror::Error;

/// Failure reaching or parsing the analysis service for one URL.
///
/// Recovered at the extraction boundary: the URL contributes an empty
/// summary and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// Connection failed, timed out, etc.
    #[error("network error: {0}")]
    Network(String),

    /// The API key was rejected
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Service answered with an error
    #[error("analysis service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Response could not be understood
    #[error("malformed response: {0}")]
    Parse(String),

    /// Client misconfigured
    #[error("client configuration error: {0}")]
    Config(String),
}

/// Invalid run input, reported before any extraction starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputValidationError {
    #[error("an analysis API key is required")]
    MissingApiKey,

    #[error("a main URL is required")]
    MissingMainUrl,

    #[error("at least one competitor URL is required")]
    NoCompetitorUrls,
}

/// Errors writing a report out.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for analysis service calls.
pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

/// Result type alias for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;

/// Client construction failure: bad input or a client that could not be built.
#[derive(Debug, Error)]
pub enum ClientBuildError {
    #[error(transparent)]
    Input(#[from] InputValidationError),

    #[error(transparent)]
    Client(#[from] AnalysisError),
}

//! Pure TextRazor REST API client.
//!
//! A minimal client for the TextRazor text analysis API. Asks the service to
//! fetch a URL and returns the entities (and topics) it recognized.
//!
//! # Example
//!
//! ```rust,ignore
//! use textrazor_client::TextRazorClient;
//!
//! let client = TextRazorClient::new("your-api-key");
//!
//! let entities = client.entities("https://example.com/article").await?;
//! for entity in &entities {
//!     println!("{} ({:.2})", entity.entity_id, entity.relevance_score);
//! }
//! ```

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::ApiKey;
pub use error::{Result, TextRazorError};
pub use types::{AnalysisBody, AnalyzeRequest, AnalyzeResponse, Entity, Topic};

use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

const BASE_URL: &str = "https://api.textrazor.com/";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-textrazor-key";

/// Pure TextRazor API client.
///
/// Holds its own key; nothing is configured process-wide.
#[derive(Clone, Debug)]
pub struct TextRazorClient {
    http_client: Client,
    api_key: ApiKey,
    base_url: String,
    extractors: Vec<String>,
}

impl TextRazorClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            extractors: vec!["entities".to_string(), "topics".to_string()],
        }
    }

    /// Create from environment variable `TEXTRAZOR_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TEXTRAZOR_API_KEY")
            .map_err(|_| TextRazorError::Config("TEXTRAZOR_API_KEY not set".into()))?;
        if api_key.trim().is_empty() {
            return Err(TextRazorError::Config("TEXTRAZOR_API_KEY is empty".into()));
        }
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, mock servers, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Replace the extractor list sent with every request.
    pub fn with_extractors(
        mut self,
        extractors: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.extractors = extractors.into_iter().map(Into::into).collect();
        self
    }

    /// Rebuild the HTTP client with a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TextRazorError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(self)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured extractors.
    pub fn extractors(&self) -> &[String] {
        &self.extractors
    }

    /// Ask TextRazor to fetch and analyze a URL.
    pub async fn analyze_url(&self, url: &str) -> Result<AnalyzeResponse> {
        let start = std::time::Instant::now();
        let request = AnalyzeRequest::new(url, &self.extractors);

        let response = self
            .http_client
            .post(&self.base_url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .form(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(url, error = %e, "TextRazor request failed");
                TextRazorError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(url, status = %status, error = %body, "TextRazor API error");
            return Err(status_error(status, body));
        }

        let analysis: AnalyzeResponse = response
            .json()
            .await
            .map_err(|e| TextRazorError::Parse(e.to_string()))?;

        if !analysis.ok {
            let message = analysis
                .error
                .unwrap_or_else(|| "request was not accepted".to_string());
            warn!(url, error = %message, "TextRazor rejected request");
            return Err(TextRazorError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            url,
            duration_ms = start.elapsed().as_millis(),
            server_time = analysis.time.unwrap_or_default(),
            "TextRazor analysis"
        );

        Ok(analysis)
    }

    /// Analyze a URL and return only the recognized entities.
    pub async fn entities(&self, url: &str) -> Result<Vec<Entity>> {
        let analysis = self.analyze_url(url).await?;
        Ok(analysis.response.map(|body| body.entities).unwrap_or_default())
    }
}

/// Map a non-2xx status and its body to an error.
fn status_error(status: StatusCode, body: String) -> TextRazorError {
    let message = serde_json::from_str::<AnalyzeResponse>(&body)
        .ok()
        .and_then(|r| r.error)
        .unwrap_or(body);

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TextRazorError::Auth {
            status: status.as_u16(),
            message,
        },
        _ => TextRazorError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

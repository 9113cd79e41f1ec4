//! TextRazor-backed [`AnalysisClient`].

use async_trait::async_trait;
use std::time::Duration;
use textrazor_client::{Entity, TextRazorClient, TextRazorError};

use crate::error::{AnalysisError, AnalysisResult, ClientBuildError, InputValidationError};
use crate::traits::AnalysisClient;
use crate::types::RawEntityObservation;

#[async_trait]
impl AnalysisClient for TextRazorClient {
    async fn analyze_entities(&self, url: &str) -> AnalysisResult<Vec<RawEntityObservation>> {
        let entities = self.entities(url).await.map_err(AnalysisError::from)?;
        Ok(entities.into_iter().map(RawEntityObservation::from).collect())
    }
}

impl From<Entity> for RawEntityObservation {
    fn from(entity: Entity) -> Self {
        Self {
            identity: entity.entity_id,
            confidence_score: entity.confidence_score,
            relevance_score: entity.relevance_score,
            category_tags: entity.freebase_types,
        }
    }
}

impl From<TextRazorError> for AnalysisError {
    fn from(err: TextRazorError) -> Self {
        match err {
            TextRazorError::Network(message) => Self::Network(message),
            TextRazorError::Auth { message, .. } => Self::Auth(message),
            TextRazorError::Api { status, message } => Self::Service { status, message },
            TextRazorError::Parse(message) => Self::Parse(message),
            TextRazorError::Config(message) => Self::Config(message),
        }
    }
}

/// Reject a missing or blank API key.
pub fn require_api_key(api_key: Option<&str>) -> Result<&str, InputValidationError> {
    match api_key.map(str::trim) {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(InputValidationError::MissingApiKey),
    }
}

/// Build a TextRazor client from explicit settings.
///
/// The key check happens here, before any request can be made.
pub fn build_textrazor_client(
    api_key: Option<&str>,
    base_url: Option<&str>,
    timeout: Option<Duration>,
) -> Result<TextRazorClient, ClientBuildError> {
    let key = require_api_key(api_key)?;
    let mut client = TextRazorClient::new(key);
    if let Some(url) = base_url {
        client = client.with_base_url(url);
    }
    if let Some(timeout) = timeout {
        client = client
            .with_timeout(timeout)
            .map_err(|e| ClientBuildError::Client(e.into()))?;
    }
    Ok(client)
}

//! Testing utilities including a mock analysis client.
//!
//! Useful for testing code built on this library without calling a real
//! text-analysis service.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use crate::error::{AnalysisError, AnalysisResult};
use crate::traits::AnalysisClient;
use crate::types::RawEntityObservation;

type Responses = HashMap<String, AnalysisResult<Vec<RawEntityObservation>>>;

/// Mock analysis client.
///
/// Returns canned observations or canned failures per URL. URLs with nothing
/// configured produce an empty observation list. Every call is recorded.
///
/// # Example
///
/// ```rust
/// use entity_gap::testing::MockAnalysisClient;
/// use entity_gap::types::RawEntityObservation;
///
/// let client = MockAnalysisClient::new().with_observations(
///     "https://example.com",
///     vec![RawEntityObservation::new("Acme", 0.9, 0.6)],
/// );
/// assert_eq!(client.call_count(), 0);
/// ```
#[derive(Default)]
pub struct MockAnalysisClient {
    responses: Arc<RwLock<Responses>>,
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockAnalysisClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return these observations for `url`.
    pub fn add_observations(
        &self,
        url: impl Into<String>,
        observations: Vec<RawEntityObservation>,
    ) {
        self.write_responses().insert(url.into(), Ok(observations));
    }

    /// Fail every call for `url` with `error`.
    pub fn add_failure(&self, url: impl Into<String>, error: AnalysisError) {
        self.write_responses().insert(url.into(), Err(error));
    }

    /// Builder form of [`add_observations`](Self::add_observations).
    pub fn with_observations(
        self,
        url: impl Into<String>,
        observations: Vec<RawEntityObservation>,
    ) -> Self {
        self.add_observations(url, observations);
        self
    }

    /// Builder form of [`add_failure`](Self::add_failure).
    pub fn with_failure(self, url: impl Into<String>, error: AnalysisError) -> Self {
        self.add_failure(url, error);
        self
    }

    /// URLs requested so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Clear recorded calls.
    pub fn reset_calls(&self) {
        self.calls.write().unwrap_or_else(|e| e.into_inner()).clear();
    }

    fn write_responses(&self) -> RwLockWriteGuard<'_, Responses> {
        self.responses.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Clone for MockAnalysisClient {
    fn clone(&self) -> Self {
        Self {
            responses: Arc::clone(&self.responses),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl AnalysisClient for MockAnalysisClient {
    async fn analyze_entities(&self, url: &str) -> AnalysisResult<Vec<RawEntityObservation>> {
        self.calls
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.to_string());

        let responses = self.responses.read().unwrap_or_else(|e| e.into_inner());
        match responses.get(url) {
            Some(response) => response.clone(),
            None => Ok(Vec::new()),
        }
    }
}

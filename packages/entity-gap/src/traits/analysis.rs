//! Analysis client trait.
//!
//! Abstracts the external text-analysis service that recognizes entities on
//! a page. Entity recognition itself is not done here; implementations wrap
//! a provider and translate its output into [`RawEntityObservation`]s.

use async_trait::async_trait;

use crate::error::AnalysisResult;
use crate::types::RawEntityObservation;

/// Entity recognition for a single URL.
///
/// Implementations are constructed with their credentials and are immutable
/// afterwards, so one instance can serve concurrent calls.
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Fetch `url` and return every entity mention found on it.
    async fn analyze_entities(&self, url: &str) -> AnalysisResult<Vec<RawEntityObservation>>;
}

#[async_trait]
impl<T: AnalysisClient + ?Sized> AnalysisClient for std::sync::Arc<T> {
    async fn analyze_entities(&self, url: &str) -> AnalysisResult<Vec<RawEntityObservation>> {
        (**self).analyze_entities(url).await
    }
}

//! Configuration types for extraction and analysis runs.

use serde::{Deserialize, Serialize};

use super::entity::RawEntityObservation;

/// How conflicting entity types are resolved.
///
/// Applies both to several matching tags on one observation and to
/// different types reported by different competitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeResolution {
    /// The last matching tag (or last competitor) wins.
    #[default]
    LastMatch,

    /// Organization > Person > Location > Other, regardless of order.
    Priority,
}

/// Configuration for the per-URL extraction step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Observations below this confidence are discarded.
    ///
    /// Default: 0.5.
    pub min_confidence: f64,

    /// Observations below this relevance are discarded.
    ///
    /// Default: 0.2.
    pub min_relevance: f64,

    #[serde(default)]
    pub type_resolution: TypeResolution,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.5,
            min_relevance: 0.2,
            type_resolution: TypeResolution::LastMatch,
        }
    }
}

impl ExtractionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn with_min_relevance(mut self, min_relevance: f64) -> Self {
        self.min_relevance = min_relevance;
        self
    }

    pub fn with_type_resolution(mut self, resolution: TypeResolution) -> Self {
        self.type_resolution = resolution;
        self
    }

    /// Retention filter: both scores must reach their minimum.
    pub fn retains(&self, observation: &RawEntityObservation) -> bool {
        observation.confidence_score >= self.min_confidence
            && observation.relevance_score >= self.min_relevance
    }
}

/// Configuration for a whole analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub extraction: ExtractionConfig,

    /// Number of URLs analyzed at the same time.
    ///
    /// Default: 4.
    pub concurrency: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            concurrency: 4,
        }
    }
}

impl RunConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_extraction(mut self, extraction: ExtractionConfig) -> Self {
        self.extraction = extraction;
        self
    }

    /// Set concurrency (values below 1 are treated as 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

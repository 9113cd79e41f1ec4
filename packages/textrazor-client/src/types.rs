//! TextRazor API request and response types.

use serde::{Deserialize, Serialize};

/// Form body for the analyze endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    /// Page the service should fetch and analyze
    pub url: String,

    /// Comma-separated extractor list (e.g. "entities,topics")
    pub extractors: String,

    /// Force a language instead of auto-detection (ISO-639-2)
    #[serde(rename = "languageOverride", skip_serializing_if = "Option::is_none")]
    pub language_override: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(url: impl Into<String>, extractors: &[String]) -> Self {
        Self {
            url: url.into(),
            extractors: extractors.join(","),
            language_override: None,
        }
    }

    /// Set a language override.
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language_override = Some(language.into());
        self
    }
}

/// Top-level analyze response.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    pub ok: bool,

    /// Error description, present when `ok` is false
    #[serde(default)]
    pub error: Option<String>,

    /// Server-side processing time in seconds
    #[serde(default)]
    pub time: Option<f64>,

    #[serde(default)]
    pub response: Option<AnalysisBody>,
}

/// Analysis results for one document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisBody {
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub entities: Vec<Entity>,

    #[serde(default)]
    pub topics: Vec<Topic>,
}

/// One entity mention recognized in the document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Stable knowledge-base identifier (e.g. "Barack Obama")
    pub entity_id: String,

    #[serde(default)]
    pub matched_text: Option<String>,

    #[serde(default)]
    pub confidence_score: f64,

    #[serde(default)]
    pub relevance_score: f64,

    /// Freebase type paths (e.g. "/organization/organization")
    #[serde(default)]
    pub freebase_types: Vec<String>,

    /// DBpedia types (e.g. "Company", "Place")
    #[serde(default, rename = "type")]
    pub types: Vec<String>,

    #[serde(default)]
    pub wiki_link: Option<String>,

    #[serde(default)]
    pub starting_pos: Option<u64>,

    #[serde(default)]
    pub ending_pos: Option<u64>,
}

/// A topic the document is about.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub label: String,

    #[serde(default)]
    pub score: f64,

    #[serde(default)]
    pub wiki_link: Option<String>,
}

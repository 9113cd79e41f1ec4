//! Competitive Entity Gap Analysis
//!
//! Compares the named entities on a main web page with the entities on a
//! set of competitor pages and reports which ones competitors cover that the
//! main page does not.
//!
//! Entity recognition is delegated to an external text-analysis service
//! behind the [`AnalysisClient`] trait. This crate filters and classifies its
//! output per URL, then aggregates the gaps under a coverage policy.
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity_gap::{run_analysis, AnalysisRequest, CoverageMode, RunConfig, TextRazorClient};
//!
//! let client = TextRazorClient::new(api_key);
//! let request = AnalysisRequest::new("https://mysite.com/guide", competitor_urls)
//!     .with_mode(CoverageMode::multiple());
//!
//! let run = run_analysis(&request, &client, &RunConfig::default()).await?;
//! for (url, error) in run.warnings() {
//!     eprintln!("Error processing {url}: {error}");
//! }
//! println!("{}", entity_gap::export::render_table(&run.report));
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The analysis client seam
//! - [`types`] - Summaries, coverage modes, reports, configuration
//! - [`pipeline`] - Extraction, aggregation and run orchestration
//! - [`analyzers`] - TextRazor-backed client
//! - [`export`] - CSV and text table output
//! - [`testing`] - Mock client for tests

pub mod analyzers;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{AnalysisError, ClientBuildError, ExportError, InputValidationError};
pub use traits::AnalysisClient;
pub use types::{
    config::{ExtractionConfig, RunConfig, TypeResolution},
    entity::{EntityRecord, EntitySummary, EntityType, RawEntityObservation},
    mode::CoverageMode,
    report::{GapReport, GapReportRow, MissedEntity},
};

pub use pipeline::{
    aggregate, aggregate_with, classify_entity_type, collect_missed_entities, extract,
    parse_url_list, run_analysis, summarize_observations, AnalysisRequest, AnalysisRun,
    ExtractionOutcome,
};

pub use analyzers::{build_textrazor_client, require_api_key, TextRazorClient};

pub use testing::MockAnalysisClient;

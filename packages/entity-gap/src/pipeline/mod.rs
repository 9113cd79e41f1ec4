//! Analysis pipeline: per-URL extraction, then gap aggregation.
//!
//! - [`extract`] - one URL's observations into an [`EntitySummary`](crate::types::EntitySummary)
//! - [`aggregate`] - main + competitor summaries into a [`GapReport`](crate::types::GapReport)
//! - [`run`] - validation and orchestration of a whole run

pub mod aggregate;
pub mod extract;
pub mod run;

pub use aggregate::{aggregate, aggregate_with, collect_missed_entities};
pub use extract::{classify_entity_type, extract, summarize_observations, ExtractionOutcome};
pub use run::{parse_url_list, run_analysis, AnalysisRequest, AnalysisRun};

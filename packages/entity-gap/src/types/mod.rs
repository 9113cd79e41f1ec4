//! Data types shared by the extraction and aggregation stages.

pub mod config;
pub mod entity;
pub mod mode;
pub mod report;

pub use config::{ExtractionConfig, RunConfig, TypeResolution};
pub use entity::{EntityRecord, EntitySummary, EntityType, RawEntityObservation};
pub use mode::{CoverageMode, ParseModeError, DEFAULT_MULTIPLE_THRESHOLD};
pub use report::{GapReport, GapReportRow, MissedEntity, SOURCES_SEPARATOR};

//! Trait seams for external collaborators.

pub mod analysis;

pub use analysis::AnalysisClient;

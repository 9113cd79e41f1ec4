//! Analysis client implementations.
//!
//! - `TextRazorClient` - TextRazor REST API (re-exported from `textrazor-client`)
//! - `MockAnalysisClient` - see [`crate::testing`]

mod textrazor;

pub use textrazor::{build_textrazor_client, require_api_key};
pub use textrazor_client::TextRazorClient;

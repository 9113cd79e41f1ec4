//! Cross-competitor gap types and the final report.

use serde::{Deserialize, Serialize};

use super::entity::EntityType;
use super::mode::CoverageMode;

/// Separator used when flattening source URLs into one cell.
pub const SOURCES_SEPARATOR: &str = ", ";

/// An entity competitors mention but the main page does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedEntity {
    pub identity: String,

    /// Sum of per-competitor counts
    pub total_mentions: u64,

    pub entity_type: EntityType,

    /// Competitor URLs mentioning the entity, in processing order
    pub sources: Vec<String>,
}

impl MissedEntity {
    pub fn new(identity: impl Into<String>, entity_type: EntityType) -> Self {
        Self {
            identity: identity.into(),
            total_mentions: 0,
            entity_type,
            sources: Vec::new(),
        }
    }

    /// Number of distinct competitors mentioning the entity.
    pub fn found_in(&self) -> usize {
        self.sources.len()
    }
}

/// One flattened report row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReportRow {
    pub entity: String,
    pub entity_type: EntityType,
    pub total_mentions: u64,
    pub found_in: usize,
    pub sources: Vec<String>,
}

impl GapReportRow {
    /// Sources joined into a single display string.
    pub fn sources_joined(&self) -> String {
        self.sources.join(SOURCES_SEPARATOR)
    }
}

impl From<MissedEntity> for GapReportRow {
    fn from(missed: MissedEntity) -> Self {
        Self {
            found_in: missed.found_in(),
            entity: missed.identity,
            entity_type: missed.entity_type,
            total_mentions: missed.total_mentions,
            sources: missed.sources,
        }
    }
}

/// Gap entities sorted by total mentions, most mentioned first.
///
/// An empty report means no gap entities qualified; it is not a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub rows: Vec<GapReportRow>,

    /// Policy the rows were filtered with
    pub mode: CoverageMode,

    /// Competitor summaries considered, empty ones included
    pub competitor_count: usize,
}

impl GapReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GapReportRow> {
        self.rows.iter()
    }

    /// Find the row for an entity.
    pub fn row(&self, entity: &str) -> Option<&GapReportRow> {
        self.rows.iter().find(|row| row.entity == entity)
    }

    /// Entity identities in report order.
    pub fn entities(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.entity.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a GapReport {
    type Item = &'a GapReportRow;
    type IntoIter = std::slice::Iter<'a, GapReportRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

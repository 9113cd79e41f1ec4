//! Per-URL entity types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse category assigned to a recognized entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityType {
    Organization,
    Person,
    Location,
    #[default]
    Other,
}

impl EntityType {
    /// Rank used by priority resolution. Higher wins.
    pub fn priority(self) -> u8 {
        match self {
            Self::Organization => 3,
            Self::Person => 2,
            Self::Location => 1,
            Self::Other => 0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Organization => "Organization",
            Self::Person => "Person",
            Self::Location => "Location",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entity observation as returned by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntityObservation {
    /// Stable opaque identity (knowledge-base ID)
    pub identity: String,

    pub confidence_score: f64,

    pub relevance_score: f64,

    /// Free-form category tags (e.g. "/organization/organization")
    #[serde(default)]
    pub category_tags: Vec<String>,
}

impl RawEntityObservation {
    pub fn new(identity: impl Into<String>, confidence_score: f64, relevance_score: f64) -> Self {
        Self {
            identity: identity.into(),
            confidence_score,
            relevance_score,
            category_tags: Vec::new(),
        }
    }

    /// Add category tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.category_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// What a page says about one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Retained mentions on the page (always >= 1)
    pub count: u32,

    pub entity_type: EntityType,

    /// Relevance of the first retained mention
    pub relevance: f64,

    /// Confidence of the first retained mention
    pub confidence: f64,
}

/// Retained entities for one analyzed URL, in first-mention order.
///
/// Identities are unique; repeated mentions only bump `count`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    entities: IndexMap<String, EntityRecord>,
}

impl EntitySummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one retained mention.
    ///
    /// A new identity is inserted with count 1. A known identity only has its
    /// count incremented; type and scores keep their first values.
    pub fn record(&mut self, observation: &RawEntityObservation, entity_type: EntityType) {
        self.entities
            .entry(observation.identity.clone())
            .and_modify(|record| record.count += 1)
            .or_insert_with(|| EntityRecord {
                count: 1,
                entity_type,
                relevance: observation.relevance_score,
                confidence: observation.confidence_score,
            });
    }

    /// Insert a record directly, replacing any existing one.
    pub fn insert(&mut self, identity: impl Into<String>, record: EntityRecord) {
        self.entities.insert(identity.into(), record);
    }

    pub fn get(&self, identity: &str) -> Option<&EntityRecord> {
        self.entities.get(identity)
    }

    pub fn contains(&self, identity: &str) -> bool {
        self.entities.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &EntityRecord)> {
        self.entities.iter().map(|(id, record)| (id.as_str(), record))
    }

    /// Sum of retained mentions across all entities.
    pub fn total_mentions(&self) -> u64 {
        self.entities.values().map(|r| u64::from(r.count)).sum()
    }
}

impl FromIterator<(String, EntityRecord)> for EntitySummary {
    fn from_iter<I: IntoIterator<Item = (String, EntityRecord)>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_repeats() {
        let mut summary = EntitySummary::new();
        let first = RawEntityObservation::new("Acme", 0.9, 0.8);
        let second = RawEntityObservation::new("Acme", 0.6, 0.3);

        summary.record(&first, EntityType::Organization);
        summary.record(&second, EntityType::Person);

        let record = summary.get("Acme").unwrap();
        assert_eq!(record.count, 2);
        assert_eq!(record.entity_type, EntityType::Organization);
        assert_eq!(record.relevance, 0.8);
        assert_eq!(record.confidence, 0.9);
        assert_eq!(summary.len(), 1);
    }

    #[test]
    fn test_iteration_keeps_first_mention_order() {
        let mut summary = EntitySummary::new();
        for id in ["B", "A", "B", "C"] {
            summary.record(&RawEntityObservation::new(id, 1.0, 1.0), EntityType::Other);
        }

        let order: Vec<&str> = summary.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(summary.total_mentions(), 4);
    }

    #[test]
    fn test_type_display() {
        assert_eq!(EntityType::Organization.to_string(), "Organization");
        assert_eq!(EntityType::default(), EntityType::Other);
        assert!(EntityType::Organization.priority() > EntityType::Person.priority());
        assert!(EntityType::Person.priority() > EntityType::Location.priority());
    }
}

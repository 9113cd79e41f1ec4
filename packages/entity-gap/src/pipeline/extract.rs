//! Extraction - turn one URL's raw observations into an entity summary.

use tracing::{debug, warn};

use crate::error::AnalysisError;
use crate::traits::AnalysisClient;
use crate::types::{
    EntitySummary, EntityType, ExtractionConfig, RawEntityObservation, TypeResolution,
};

/// Result of analyzing one URL.
///
/// A failed URL carries an empty summary and the error, so callers can tell
/// "no entities" apart from "could not analyze".
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    pub url: String,
    pub summary: EntitySummary,
    pub error: Option<AnalysisError>,
}

impl ExtractionOutcome {
    pub fn success(url: impl Into<String>, summary: EntitySummary) -> Self {
        Self {
            url: url.into(),
            summary,
            error: None,
        }
    }

    pub fn failure(url: impl Into<String>, error: AnalysisError) -> Self {
        Self {
            url: url.into(),
            summary: EntitySummary::new(),
            error: Some(error),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

/// Map a single category tag to an entity type, if it names one.
fn classify_tag(tag: &str) -> Option<EntityType> {
    if tag.contains("organization") || tag.contains("company") {
        Some(EntityType::Organization)
    } else if tag.contains("person") {
        Some(EntityType::Person)
    } else if tag.contains("location") || tag.contains("place") {
        Some(EntityType::Location)
    } else {
        None
    }
}

/// Classify an observation by its category tags.
///
/// Matching is case-sensitive substring search. With no matching tag the
/// type is `Other`.
pub fn classify_entity_type<S: AsRef<str>>(tags: &[S], resolution: TypeResolution) -> EntityType {
    let matches = tags.iter().filter_map(|tag| classify_tag(tag.as_ref()));

    let resolved = match resolution {
        TypeResolution::LastMatch => matches.last(),
        TypeResolution::Priority => matches.max_by_key(|t| t.priority()),
    };

    resolved.unwrap_or(EntityType::Other)
}

/// Filter and fold raw observations into a summary.
pub fn summarize_observations(
    observations: &[RawEntityObservation],
    config: &ExtractionConfig,
) -> EntitySummary {
    let mut summary = EntitySummary::new();

    for observation in observations.iter().filter(|o| config.retains(o)) {
        let entity_type =
            classify_entity_type(observation.category_tags.as_slice(), config.type_resolution);
        summary.record(observation, entity_type);
    }

    summary
}

/// Analyze one URL.
///
/// Never fails: a client error is logged as a warning and turned into an
/// empty summary carrying the error.
pub async fn extract<C>(url: &str, client: &C, config: &ExtractionConfig) -> ExtractionOutcome
where
    C: AnalysisClient + ?Sized,
{
    match client.analyze_entities(url).await {
        Ok(observations) => {
            let summary = summarize_observations(&observations, config);
            debug!(
                url,
                observed = observations.len(),
                retained = summary.len(),
                "Extracted entities"
            );
            ExtractionOutcome::success(url, summary)
        }
        Err(error) => {
            warn!(url, error = %error, "Error processing URL, treating it as empty");
            ExtractionOutcome::failure(url, error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockAnalysisClient;

    fn obs(id: &str, confidence: f64, relevance: f64, tags: &[&str]) -> RawEntityObservation {
        RawEntityObservation::new(id, confidence, relevance).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_classify_single_tags() {
        let last = TypeResolution::LastMatch;
        assert_eq!(
            classify_entity_type(&["/organization/organization"], last),
            EntityType::Organization
        );
        assert_eq!(classify_entity_type(&["/business/company"], last), EntityType::Organization);
        assert_eq!(classify_entity_type(&["/people/person"], last), EntityType::Person);
        assert_eq!(classify_entity_type(&["/location/citytown"], last), EntityType::Location);
        assert_eq!(classify_entity_type(&["/base/place"], last), EntityType::Location);
        assert_eq!(classify_entity_type(&["/film/film"], last), EntityType::Other);
        assert_eq!(classify_entity_type::<&str>(&[], last), EntityType::Other);
    }

    #[test]
    fn test_organization_checked_before_person_within_a_tag() {
        let tags = ["/organization/person_founded"];
        assert_eq!(
            classify_entity_type(&tags, TypeResolution::LastMatch),
            EntityType::Organization
        );
    }

    #[test]
    fn test_last_matching_tag_wins() {
        let tags = ["/organization/organization", "/people/person", "/film/film"];
        assert_eq!(classify_entity_type(&tags, TypeResolution::LastMatch), EntityType::Person);

        let tags = ["/people/person", "/location/location"];
        assert_eq!(classify_entity_type(&tags, TypeResolution::LastMatch), EntityType::Location);
    }

    #[test]
    fn test_priority_resolution() {
        let tags = ["/location/location", "/organization/organization", "/people/person"];
        assert_eq!(
            classify_entity_type(&tags, TypeResolution::Priority),
            EntityType::Organization
        );
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(
            classify_entity_type(&["Organization"], TypeResolution::LastMatch),
            EntityType::Other
        );
    }

    #[test]
    fn test_summarize_filters_low_scores() {
        let observations = vec![
            obs("Kept", 0.5, 0.2, &[]),
            obs("LowConfidence", 0.4, 0.9, &[]),
            obs("LowRelevance", 0.9, 0.1, &[]),
        ];

        let summary = summarize_observations(&observations, &ExtractionConfig::default());
        assert_eq!(summary.len(), 1);
        assert!(summary.contains("Kept"));
    }

    #[test]
    fn test_summarize_repeats_only_bump_count() {
        let observations = vec![
            obs("Acme", 0.9, 0.7, &["/organization/organization"]),
            obs("Acme", 0.6, 0.3, &["/people/person"]),
            obs("Acme", 0.1, 0.3, &["/people/person"]),
        ];

        let summary = summarize_observations(&observations, &ExtractionConfig::default());
        let record = summary.get("Acme").unwrap();
        assert_eq!(record.count, 2);
        assert_eq!(record.entity_type, EntityType::Organization);
        assert_eq!(record.confidence, 0.9);
        assert_eq!(record.relevance, 0.7);
    }

    #[tokio::test]
    async fn test_extract_success() {
        let client = MockAnalysisClient::new().with_observations(
            "https://a.example",
            vec![obs("Acme", 0.9, 0.5, &["/business/company"])],
        );

        let outcome = extract("https://a.example", &client, &ExtractionConfig::default()).await;
        assert!(!outcome.is_failure());
        assert_eq!(outcome.url, "https://a.example");
        assert_eq!(outcome.summary.len(), 1);
    }

    #[tokio::test]
    async fn test_extract_failure_yields_empty_summary() {
        let client = MockAnalysisClient::new()
            .with_failure("https://down.example", AnalysisError::Network("refused".into()));

        let outcome = extract("https://down.example", &client, &ExtractionConfig::default()).await;
        assert!(outcome.is_failure());
        assert!(outcome.summary.is_empty());
        assert_eq!(outcome.error, Some(AnalysisError::Network("refused".into())));
    }
}

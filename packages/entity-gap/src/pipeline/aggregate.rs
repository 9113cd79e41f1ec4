//! Aggregation - combine competitor summaries into a gap report.
//!
//! Pure computation over already-extracted summaries. No I/O happens here.

use indexmap::IndexMap;
use tracing::debug;

use crate::types::{
    CoverageMode, EntitySummary, GapReport, GapReportRow, MissedEntity, TypeResolution,
};

/// Accumulate every competitor entity missing from `main`.
///
/// Competitors are visited in map order. Entities come back in order of
/// first encounter; each competitor URL appears at most once per entity.
pub fn collect_missed_entities(
    main: &EntitySummary,
    competitors: &IndexMap<String, EntitySummary>,
    resolution: TypeResolution,
) -> Vec<MissedEntity> {
    let mut missed: IndexMap<&str, MissedEntity> = IndexMap::new();

    for (url, summary) in competitors {
        for (identity, record) in summary.iter() {
            if main.contains(identity) {
                continue;
            }

            let entry = missed
                .entry(identity)
                .or_insert_with(|| MissedEntity::new(identity, record.entity_type));

            entry.total_mentions += u64::from(record.count);
            entry.entity_type = match resolution {
                TypeResolution::LastMatch => record.entity_type,
                TypeResolution::Priority => {
                    if record.entity_type.priority() > entry.entity_type.priority() {
                        record.entity_type
                    } else {
                        entry.entity_type
                    }
                }
            };
            entry.sources.push(url.clone());
        }
    }

    missed.into_values().collect()
}

/// Build the gap report with last-competitor-wins type resolution.
pub fn aggregate(
    main: &EntitySummary,
    competitors: &IndexMap<String, EntitySummary>,
    mode: CoverageMode,
) -> GapReport {
    aggregate_with(main, competitors, mode, TypeResolution::LastMatch)
}

/// Build the gap report.
///
/// Keeps entities whose coverage satisfies `mode`, sorted by total mentions
/// descending. Ties keep first-encounter order.
pub fn aggregate_with(
    main: &EntitySummary,
    competitors: &IndexMap<String, EntitySummary>,
    mode: CoverageMode,
    resolution: TypeResolution,
) -> GapReport {
    let competitor_count = competitors.len();
    let missed = collect_missed_entities(main, competitors, resolution);
    let candidates = missed.len();

    let mut rows: Vec<GapReportRow> = missed
        .into_iter()
        .filter(|m| mode.includes(m.found_in(), competitor_count))
        .map(GapReportRow::from)
        .collect();

    // Vec::sort_by is stable
    rows.sort_by(|a, b| b.total_mentions.cmp(&a.total_mentions));

    debug!(
        %mode,
        competitor_count,
        candidates,
        reported = rows.len(),
        "Aggregated entity gaps"
    );

    GapReport {
        rows,
        mode,
        competitor_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EntityRecord, EntityType};

    fn summary(entries: &[(&str, u32, EntityType)]) -> EntitySummary {
        entries
            .iter()
            .map(|(id, count, entity_type)| {
                (
                    id.to_string(),
                    EntityRecord {
                        count: *count,
                        entity_type: *entity_type,
                        relevance: 0.5,
                        confidence: 0.9,
                    },
                )
            })
            .collect()
    }

    fn others(entries: &[(&str, u32)]) -> EntitySummary {
        let typed: Vec<(&str, u32, EntityType)> =
            entries.iter().map(|(id, c)| (*id, *c, EntityType::Other)).collect();
        summary(&typed)
    }

    fn competitors(entries: Vec<(&str, EntitySummary)>) -> IndexMap<String, EntitySummary> {
        entries.into_iter().map(|(url, s)| (url.to_string(), s)).collect()
    }

    #[test]
    fn test_any_mode_scenario() {
        let main = others(&[("A", 1)]);
        let comps = competitors(vec![
            ("https://c1.example", others(&[("A", 2), ("B", 1)])),
            ("https://c2.example", others(&[("C", 3)])),
        ]);

        let report = aggregate(&main, &comps, CoverageMode::Any);

        assert_eq!(report.entities(), vec!["C", "B"]);
        let c = report.row("C").unwrap();
        assert_eq!((c.total_mentions, c.found_in), (3, 1));
        let b = report.row("B").unwrap();
        assert_eq!((b.total_mentions, b.found_in), (1, 1));
        assert_eq!(b.sources, vec!["https://c1.example"]);
    }

    #[test]
    fn test_multiple_mode_scenario() {
        let main = EntitySummary::new();
        let comps = competitors(vec![
            ("https://c1.example", others(&[("X", 1)])),
            ("https://c2.example", others(&[("X", 2)])),
            ("https://c3.example", others(&[("Y", 5)])),
        ]);

        let report = aggregate(&main, &comps, CoverageMode::multiple());

        assert_eq!(report.len(), 1);
        let x = &report.rows[0];
        assert_eq!(x.entity, "X");
        assert_eq!(x.total_mentions, 3);
        assert_eq!(x.found_in, 2);
        assert_eq!(x.sources_joined(), "https://c1.example, https://c2.example");
    }

    #[test]
    fn test_all_mode_scenario() {
        let main = EntitySummary::new();
        let comps = competitors(vec![
            ("https://c1.example", others(&[("X", 1)])),
            ("https://c2.example", others(&[("X", 2)])),
            ("https://c3.example", others(&[("Y", 5)])),
        ]);

        let report = aggregate(&main, &comps, CoverageMode::All);

        assert!(report.is_empty());
        assert_eq!(report.competitor_count, 3);
    }

    #[test]
    fn test_all_mode_counts_empty_competitors() {
        let main = EntitySummary::new();
        let comps = competitors(vec![
            ("https://c1.example", others(&[("X", 1)])),
            ("https://c2.example", EntitySummary::new()),
        ]);

        assert!(aggregate(&main, &comps, CoverageMode::All).is_empty());
        assert_eq!(aggregate(&main, &comps, CoverageMode::Any).len(), 1);
    }

    #[test]
    fn test_ties_keep_first_encounter_order() {
        let main = EntitySummary::new();
        let comps = competitors(vec![
            ("https://c1.example", others(&[("First", 2), ("Big", 9)])),
            ("https://c2.example", others(&[("Second", 2), ("Third", 2)])),
        ]);

        let report = aggregate(&main, &comps, CoverageMode::Any);
        assert_eq!(report.entities(), vec!["Big", "First", "Second", "Third"]);
    }

    #[test]
    fn test_last_competitor_type_wins() {
        let main = EntitySummary::new();
        let comps = competitors(vec![
            ("https://c1.example", summary(&[("Jordan", 1, EntityType::Person)])),
            ("https://c2.example", summary(&[("Jordan", 1, EntityType::Location)])),
        ]);

        let report = aggregate(&main, &comps, CoverageMode::Any);
        assert_eq!(report.rows[0].entity_type, EntityType::Location);
    }

    #[test]
    fn test_priority_type_resolution_across_competitors() {
        let main = EntitySummary::new();
        let comps = competitors(vec![
            ("https://c1.example", summary(&[("Jordan", 1, EntityType::Person)])),
            ("https://c2.example", summary(&[("Jordan", 1, EntityType::Location)])),
        ]);

        let report = aggregate_with(&main, &comps, CoverageMode::Any, TypeResolution::Priority);
        assert_eq!(report.rows[0].entity_type, EntityType::Person);
    }

    #[test]
    fn test_no_competitors_yields_empty_report() {
        let report = aggregate(&others(&[("A", 1)]), &IndexMap::new(), CoverageMode::All);
        assert!(report.is_empty());
        assert_eq!(report.competitor_count, 0);
    }
}

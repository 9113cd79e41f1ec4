//! Tabular output for gap reports: CSV export and a plain-text table.

use std::io::Write;

use crate::error::ExportResult;
use crate::types::GapReport;

/// Default file name for CSV downloads.
pub const DEFAULT_EXPORT_FILE: &str = "competitive_entity_analysis.csv";

/// Column headers, in output order.
pub const COLUMNS: [&str; 5] = ["Entity", "Type", "Total Mentions", "Found In", "Sources"];

/// Shown instead of a table when the report has no rows.
pub const EMPTY_REPORT_MESSAGE: &str =
    "No competitor entities found that are missing from your main URL.";

/// Write the report as CSV, header first.
pub fn write_csv<W: Write>(report: &GapReport, writer: W) -> ExportResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(COLUMNS)?;

    for row in report {
        csv.write_record([
            row.entity.clone(),
            row.entity_type.to_string(),
            row.total_mentions.to_string(),
            row.found_in.to_string(),
            row.sources_joined(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Render the report as a CSV string.
pub fn to_csv_string(report: &GapReport) -> ExportResult<String> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Render the report as an aligned text table.
pub fn render_table(report: &GapReport) -> String {
    if report.is_empty() {
        return EMPTY_REPORT_MESSAGE.to_string();
    }

    let cells: Vec<[String; 5]> = report
        .iter()
        .map(|row| {
            [
                row.entity.clone(),
                row.entity_type.to_string(),
                row.total_mentions.to_string(),
                row.found_in.to_string(),
                row.sources_joined(),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(|c| c.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: [&str; 5]| -> String {
        values
            .iter()
            .zip(widths.iter())
            .enumerate()
            .map(|(i, (value, width))| {
                // Numeric columns are right-aligned
                if i == 2 || i == 3 {
                    format!("{:>width$}", value, width = width)
                } else {
                    format!("{:<width$}", value, width = width)
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(format_line(COLUMNS));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in &cells {
        lines.push(format_line([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
            row[4].as_str(),
        ]));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CoverageMode, EntityType, GapReportRow};

    fn report() -> GapReport {
        GapReport {
            rows: vec![
                GapReportRow {
                    entity: "Acme, Inc.".into(),
                    entity_type: EntityType::Organization,
                    total_mentions: 12,
                    found_in: 2,
                    sources: vec!["https://a.example".into(), "https://b.example".into()],
                },
                GapReportRow {
                    entity: "Duluth".into(),
                    entity_type: EntityType::Location,
                    total_mentions: 3,
                    found_in: 1,
                    sources: vec!["https://b.example".into()],
                },
            ],
            mode: CoverageMode::Any,
            competitor_count: 2,
        }
    }

    #[test]
    fn test_csv_header_and_quoting() {
        let csv = to_csv_string(&report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "Entity,Type,Total Mentions,Found In,Sources");
        assert_eq!(
            lines[1],
            r#""Acme, Inc.",Organization,12,2,"https://a.example, https://b.example""#
        );
        assert_eq!(lines[2], "Duluth,Location,3,1,https://b.example");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_empty_report_has_header_only() {
        let empty = GapReport {
            rows: vec![],
            mode: CoverageMode::All,
            competitor_count: 3,
        };
        let csv = to_csv_string(&empty).unwrap();
        assert_eq!(csv.trim_end(), "Entity,Type,Total Mentions,Found In,Sources");
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&report());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Entity"));
        assert!(lines[1].starts_with("----------"));
        assert!(lines[2].starts_with("Acme, Inc.  Organization"));
        assert!(lines[3].contains("https://b.example"));
    }

    #[test]
    fn test_table_empty_message() {
        let empty = GapReport {
            rows: vec![],
            mode: CoverageMode::Any,
            competitor_count: 1,
        };
        assert_eq!(render_table(&empty), EMPTY_REPORT_MESSAGE);
    }
}

//! Analysis run - validate input, extract every URL, aggregate.

use futures::future::join_all;
use indexmap::{IndexMap, IndexSet};
use tokio::sync::Semaphore;
use tracing::info;

use crate::error::{AnalysisError, InputValidationError};
use crate::pipeline::aggregate::aggregate_with;
use crate::pipeline::extract::{extract, ExtractionOutcome};
use crate::traits::AnalysisClient;
use crate::types::{CoverageMode, EntitySummary, GapReport, RunConfig};

/// Split free text into URLs: one per line, trimmed, blank lines dropped.
pub fn parse_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Input for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub main_url: String,
    pub competitor_urls: Vec<String>,
    pub mode: CoverageMode,
}

impl AnalysisRequest {
    /// Create a request using [`CoverageMode::Any`].
    pub fn new(
        main_url: impl Into<String>,
        competitor_urls: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            main_url: main_url.into(),
            competitor_urls: competitor_urls.into_iter().map(Into::into).collect(),
            mode: CoverageMode::Any,
        }
    }

    pub fn with_mode(mut self, mode: CoverageMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the request without running it.
    pub fn validate(&self) -> Result<(), InputValidationError> {
        self.normalized().map(|_| ())
    }

    /// Trimmed main URL and competitor URLs with blanks and repeats removed.
    ///
    /// A repeated competitor URL keeps the position of its first occurrence.
    fn normalized(&self) -> Result<(String, Vec<String>), InputValidationError> {
        let main_url = self.main_url.trim();
        if main_url.is_empty() {
            return Err(InputValidationError::MissingMainUrl);
        }

        let competitors: IndexSet<&str> = self
            .competitor_urls
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
            .collect();

        if competitors.is_empty() {
            return Err(InputValidationError::NoCompetitorUrls);
        }

        Ok((
            main_url.to_string(),
            competitors.into_iter().map(String::from).collect(),
        ))
    }
}

/// Everything produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRun {
    pub report: GapReport,

    pub main: ExtractionOutcome,

    /// One outcome per distinct competitor URL, in request order
    pub competitors: Vec<ExtractionOutcome>,
}

impl AnalysisRun {
    /// URLs that could not be analyzed, with the reason.
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &AnalysisError)> {
        std::iter::once(&self.main)
            .chain(self.competitors.iter())
            .filter_map(|outcome| outcome.error.as_ref().map(|e| (outcome.url.as_str(), e)))
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// Competitor summaries keyed by URL, in request order.
    pub fn competitor_summaries(&self) -> IndexMap<String, EntitySummary> {
        summaries_by_url(&self.competitors)
    }
}

fn summaries_by_url(outcomes: &[ExtractionOutcome]) -> IndexMap<String, EntitySummary> {
    outcomes
        .iter()
        .map(|outcome| (outcome.url.clone(), outcome.summary.clone()))
        .collect()
}

/// Run a full analysis.
///
/// Input is validated before the client is called. A URL the client fails
/// on contributes an empty summary and shows up in [`AnalysisRun::warnings`];
/// it never aborts the run.
pub async fn run_analysis<C>(
    request: &AnalysisRequest,
    client: &C,
    config: &RunConfig,
) -> Result<AnalysisRun, InputValidationError>
where
    C: AnalysisClient + ?Sized,
{
    let (main_url, competitor_urls) = request.normalized()?;

    info!(
        main_url = %main_url,
        competitors = competitor_urls.len(),
        mode = %request.mode,
        "Starting entity gap analysis"
    );

    let semaphore = Semaphore::new(config.concurrency.max(1));
    let urls: Vec<&str> = std::iter::once(main_url.as_str())
        .chain(competitor_urls.iter().map(String::as_str))
        .collect();

    let extractions = urls.iter().map(|url| {
        let semaphore = &semaphore;
        async move {
            // The semaphore is never closed, so acquiring cannot fail.
            let _permit = semaphore.acquire().await.ok();
            extract(url, client, &config.extraction).await
        }
    });

    let mut outcomes = join_all(extractions).await.into_iter();
    let main = match outcomes.next() {
        Some(outcome) => outcome,
        None => ExtractionOutcome::success(main_url.as_str(), EntitySummary::new()),
    };
    let competitors: Vec<ExtractionOutcome> = outcomes.collect();

    let report = aggregate_with(
        &main.summary,
        &summaries_by_url(&competitors),
        request.mode,
        config.extraction.type_resolution,
    );

    let run = AnalysisRun {
        report,
        main,
        competitors,
    };

    info!(
        gap_entities = run.report.len(),
        failed_urls = run.warnings().count(),
        "Entity gap analysis complete"
    );

    Ok(run)
}

// Entry point for the entity gap CLI

mod args;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use entity_gap::{
    build_textrazor_client, export, parse_url_list, run_analysis, AnalysisRequest,
    ExtractionConfig, RunConfig, TypeResolution,
};
use std::fs::File;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use args::Cli;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,entity_gap=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let mut competitor_urls = cli.competitors.clone();
    if let Some(path) = &cli.competitors_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read competitors file {}", path.display()))?;
        competitor_urls.extend(parse_url_list(&text));
    }

    let api_key = cli.api_key.as_deref().or(config.textrazor_api_key.as_deref());
    let client = build_textrazor_client(
        api_key,
        config.textrazor_base_url.as_deref(),
        Some(config.request_timeout),
    )
    .context("Failed to set up TextRazor client")?;

    let type_resolution = if cli.priority_types {
        TypeResolution::Priority
    } else {
        TypeResolution::LastMatch
    };
    let run_config = RunConfig::new()
        .with_extraction(ExtractionConfig::new().with_type_resolution(type_resolution))
        .with_concurrency(cli.concurrency.unwrap_or(config.concurrency));

    let request = AnalysisRequest::new(cli.main_url.as_str(), competitor_urls).with_mode(cli.mode);

    let run = run_analysis(&request, &client, &run_config)
        .await
        .context("Analysis did not start")?;

    for (url, error) in run.warnings() {
        eprintln!("{} Error processing {}: {}", "warning:".yellow().bold(), url, error);
    }

    if !run.report.is_empty() {
        println!(
            "{}",
            "Entities Mentioned by Competitors (Missing from Main URL):".bold()
        );
    }
    println!("{}", export::render_table(&run.report));

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        export::write_csv(&run.report, file).context("Failed to write CSV")?;
        tracing::info!(path = %path.display(), rows = run.report.len(), "CSV written");
    }

    Ok(())
}

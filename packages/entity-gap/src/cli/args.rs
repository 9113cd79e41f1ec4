use clap::Parser;
use entity_gap::CoverageMode;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "entity-gap")]
#[command(about = "Find entities competitor pages cover that your page does not")]
pub struct Cli {
    /// Page to analyze
    #[arg(long)]
    pub main_url: String,

    /// Competitor page (repeatable)
    #[arg(long = "competitor", value_name = "URL")]
    pub competitors: Vec<String>,

    /// File with competitor URLs, one per line
    #[arg(long, value_name = "PATH")]
    pub competitors_file: Option<PathBuf>,

    /// Coverage policy: any, multiple, multiple:N or all
    #[arg(long, default_value = "any")]
    pub mode: CoverageMode,

    /// Resolve conflicting types by Organization > Person > Location instead of last match
    #[arg(long)]
    pub priority_types: bool,

    /// URLs analyzed at the same time (overrides ENTITY_GAP_CONCURRENCY)
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Also write the report as CSV
    #[arg(
        long,
        value_name = "PATH",
        num_args = 0..=1,
        default_missing_value = entity_gap::export::DEFAULT_EXPORT_FILE
    )]
    pub csv: Option<PathBuf>,

    /// TextRazor API key (overrides TEXTRAZOR_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,
}

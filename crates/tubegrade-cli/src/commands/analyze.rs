//! Analyze command
//!
//! Score a video's comments and render the analysis report.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use tubegrade_core::catalog::persistence::load_catalog;
use tubegrade_core::config::Config;
use tubegrade_core::report::ReportFormat;
use tubegrade_core::types::VideoId;

/// Analyze command arguments
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Video ID to analyze
    pub video_id: String,

    /// Catalog file (defaults to the configured path)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Report format (text/markdown/json)
    #[arg(long, short)]
    pub format: Option<String>,

    /// Include per-comment sentiment breakdown
    #[arg(long)]
    pub breakdown: bool,

    /// Write the report to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the analyze command
pub fn execute(args: AnalyzeArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let catalog_path = super::resolve_catalog_path(args.catalog, config);
    let mut catalog = load_catalog(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    let video_id = VideoId::from_string(&args.video_id);
    let result = catalog
        .analyze_video(&video_id)
        .with_context(|| format!("Failed to analyze video '{}'", args.video_id))?;

    let video = catalog
        .video(&video_id)
        .with_context(|| format!("Video '{}' not found in catalog", args.video_id))?;
    let comments = catalog.comments_for_video(&video_id);

    let format: ReportFormat = args
        .format
        .as_deref()
        .unwrap_or(&config.output.default_format)
        .parse()?;
    let include_breakdown = args.breakdown || config.output.include_breakdown;

    let report = format
        .renderer(include_breakdown)
        .render(video, &result, &comments)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("{} Report written to {}", "✓".green(), path.display());
        }
        None => print!("{}", report),
    }

    Ok(())
}

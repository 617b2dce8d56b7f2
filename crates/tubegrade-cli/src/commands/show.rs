//! Show command
//!
//! Show one video with its comments and stored analysis result.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use tubegrade_core::config::Config;
use tubegrade_core::catalog::persistence::load_catalog;
use tubegrade_core::types::VideoId;

/// Show command arguments
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Video ID to show
    pub video_id: String,

    /// Catalog file (defaults to the configured path)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let catalog_path = super::resolve_catalog_path(args.catalog, config);
    let catalog = load_catalog(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    let video_id = VideoId::from_string(&args.video_id);
    let video = catalog
        .video(&video_id)
        .with_context(|| format!("Video '{}' not found in catalog", args.video_id))?;
    let comments = catalog.comments_for_video(&video_id);
    let result = catalog.result_for(&video_id);

    if args.json {
        let payload = serde_json::json!({
            "video": video,
            "comments": comments,
            "result": result,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", "Video Details".bold().underline());
    println!();
    println!("  ID: {}", video.id.to_string().green());
    println!("  Title: {}", video.title);
    println!("  URL: {}", video.url);
    println!("  Duration: {} seconds", video.duration_secs);
    println!("  Category: {}", video.category.cyan());
    println!("  Views: {}", video.view_count.to_string().yellow());
    println!(
        "  Uploaded: {}",
        video.uploaded_at.format("%Y-%m-%d %H:%M:%S")
    );

    println!();
    println!("{}", "Comments".bold());
    if comments.is_empty() {
        println!("  No comments on this video.");
    }
    for comment in &comments {
        println!(
            "  {} by {}: {}",
            comment.id.to_string().green(),
            comment.author_id.to_string().cyan(),
            comment.text
        );
        println!(
            "    {} likes, {} dislikes",
            comment.like_count.to_string().yellow(),
            comment.dislike_count.to_string().yellow()
        );
    }

    if let Some(result) = result {
        println!();
        println!("{}", "Stored Analysis".bold());
        println!(
            "  Quality Score: {}",
            format!("{:.1}/10", result.quality_score).bold()
        );
        println!("  Tier: {}", result.tier.to_string().cyan());
        println!("  {}", result.recommendation());
        println!(
            "  Computed: {}",
            result.computed_at.format("%Y-%m-%d %H:%M:%S")
        );
    }

    Ok(())
}

//! List command
//!
//! List catalog records.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use tubegrade_core::catalog::persistence::load_catalog;
use tubegrade_core::catalog::Catalog;
use tubegrade_core::config::Config;
use tubegrade_core::types::VideoId;

/// List command arguments
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Catalog file (defaults to the configured path)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub target: ListTarget,
}

/// What to list
#[derive(Debug, Subcommand)]
pub enum ListTarget {
    /// List all users
    Users,

    /// List all videos
    Videos,

    /// List comments, optionally for one video
    Comments {
        /// Restrict to one video
        #[arg(long)]
        video: Option<String>,
    },
}

/// Execute the list command
pub fn execute(args: ListArgs, config: &Config) -> Result<()> {
    let catalog_path = super::resolve_catalog_path(args.catalog, config);
    let catalog = load_catalog(&catalog_path)
        .with_context(|| format!("Failed to load catalog from {}", catalog_path.display()))?;

    match args.target {
        ListTarget::Users => list_users(&catalog, args.json),
        ListTarget::Videos => list_videos(&catalog, args.json),
        ListTarget::Comments { video } => list_comments(&catalog, video.as_deref(), args.json),
    }
}

fn list_users(catalog: &Catalog, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let users = catalog.users_sorted();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&users)?);
        return Ok(());
    }

    if users.is_empty() {
        println!("No users in the catalog.");
        return Ok(());
    }

    println!("{}", "Users:".bold().underline());
    println!();
    for user in users {
        println!(
            "  {} {} <{}> ({})",
            user.id.to_string().green(),
            user.username,
            user.email.dimmed(),
            user.kind.to_string().cyan()
        );
    }
    Ok(())
}

fn list_videos(catalog: &Catalog, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let videos = catalog.videos_sorted();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&videos)?);
        return Ok(());
    }

    if videos.is_empty() {
        println!("No videos in the catalog.");
        return Ok(());
    }

    println!("{}", "Videos:".bold().underline());
    println!();
    for video in videos {
        let comments = catalog.comments_for_video(&video.id).len();
        println!(
            "  {} {} [{}] {} views, {} comments",
            video.id.to_string().green(),
            video.title,
            video.category.cyan(),
            video.view_count.to_string().yellow(),
            comments.to_string().yellow()
        );
    }
    Ok(())
}

fn list_comments(catalog: &Catalog, video: Option<&str>, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let comments = match video {
        Some(id) => catalog.comments_for_video(&VideoId::from_string(id)),
        None => catalog.comments_sorted(),
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&comments)?);
        return Ok(());
    }

    if comments.is_empty() {
        println!("No comments found.");
        return Ok(());
    }

    println!("{}", "Comments:".bold().underline());
    println!();
    for comment in comments {
        println!(
            "  {} on {} by {}: {}",
            comment.id.to_string().green(),
            comment.video_id.to_string().cyan(),
            comment.author_id.to_string().cyan(),
            comment.text
        );
        println!(
            "    {} likes, {} dislikes ({})",
            comment.like_count.to_string().yellow(),
            comment.dislike_count.to_string().yellow(),
            comment
                .posted_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );
    }
    Ok(())
}

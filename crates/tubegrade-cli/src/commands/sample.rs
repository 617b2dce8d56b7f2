//! Sample command
//!
//! Write a small demonstration catalog for trying out the tool.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use tubegrade_core::catalog::persistence::save_catalog;
use tubegrade_core::catalog::{Catalog, Comment, User, Video};
use tubegrade_core::types::{CommentId, UserId, VideoId};

/// Sample command arguments
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Where to write the catalog file
    #[arg(long, short, default_value = "catalog.json")]
    pub output: PathBuf,

    /// Overwrite without confirmation
    #[arg(long, short)]
    pub force: bool,
}

/// Execute the sample command
pub fn execute(args: SampleArgs) -> Result<()> {
    use colored::Colorize;

    if args.output.exists() && !args.force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt(format!("Overwrite {}?", args.output.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let catalog = build_sample_catalog().context("Failed to build sample catalog")?;
    save_catalog(&args.output, &catalog)
        .with_context(|| format!("Failed to write catalog to {}", args.output.display()))?;

    println!(
        "{} Sample catalog written to {} ({} users, {} videos, {} comments)",
        "✓".green(),
        args.output.display(),
        catalog.user_count(),
        catalog.video_count(),
        catalog.comment_count()
    );
    println!(
        "Try: {}",
        format!("tubegrade analyze vid-ferrets --catalog {}", args.output.display()).cyan()
    );

    Ok(())
}

fn build_sample_catalog() -> tubegrade_core::Result<Catalog> {
    let mut catalog = Catalog::new();

    catalog.add_user(User::creator(
        UserId::from_string("chan-nature"),
        "naturechan",
        "nature@example.com",
    ))?;
    catalog.add_user(User::viewer(
        UserId::from_string("vera"),
        "vera",
        "vera@example.com",
    ))?;
    catalog.add_user(User::new(
        UserId::from_string("pat"),
        "pat",
        "pat@example.com",
    ))?;

    catalog.add_video(Video::new(
        VideoId::from_string("vid-ferrets"),
        UserId::from_string("chan-nature"),
        "A day with ferrets",
        "https://example.com/vid-ferrets",
        427,
        "animals",
    ))?;
    catalog.add_video(Video::new(
        VideoId::from_string("vid-volcano"),
        UserId::from_string("chan-nature"),
        "Volcano timelapse",
        "https://example.com/vid-volcano",
        183,
        "nature",
    ))?;

    catalog.add_comment(Comment::new(
        CommentId::from_string("cmt-1"),
        VideoId::from_string("vid-ferrets"),
        UserId::from_string("vera"),
        "Amazing footage, love the ferrets!",
    ))?;
    catalog.add_comment(Comment::new(
        CommentId::from_string("cmt-2"),
        VideoId::from_string("vid-ferrets"),
        UserId::from_string("pat"),
        "Good editing but the audio is bad",
    ))?;
    catalog.add_comment(Comment::new(
        CommentId::from_string("cmt-3"),
        VideoId::from_string("vid-ferrets"),
        UserId::from_string("vera"),
        "Best nature channel on the platform",
    ))?;
    catalog.add_comment(Comment::new(
        CommentId::from_string("cmt-4"),
        VideoId::from_string("vid-volcano"),
        UserId::from_string("pat"),
        "Terrible framerate, very disappointing",
    ))?;

    catalog.like_comment(&CommentId::from_string("cmt-1"))?;
    catalog.like_comment(&CommentId::from_string("cmt-1"))?;
    catalog.dislike_comment(&CommentId::from_string("cmt-4"))?;
    catalog.watch(&UserId::from_string("vera"), &VideoId::from_string("vid-ferrets"))?;

    Ok(catalog)
}

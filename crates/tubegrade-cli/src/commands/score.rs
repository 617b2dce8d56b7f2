//! Score command
//!
//! Score ad-hoc comment texts without a catalog.

use anyhow::Result;
use clap::Args;
use std::io::Read;

use tubegrade_core::scoring::{comment_sentiment, CommentScorer};

/// Score command arguments
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Comment texts to score (reads stdin lines when empty)
    pub texts: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the score command
pub fn execute(args: ScoreArgs) -> Result<()> {
    let texts = if args.texts.is_empty() {
        read_stdin_lines()?
    } else {
        args.texts
    };

    let scorer = CommentScorer::new();
    let result = scorer.analyze_texts(texts.iter().map(String::as_str));

    if args.json {
        let sentiments: Vec<serde_json::Value> = texts
            .iter()
            .map(|text| {
                serde_json::json!({
                    "text": text,
                    "sentiment": comment_sentiment(text),
                })
            })
            .collect();
        let payload = serde_json::json!({
            "quality_score": result.quality_score,
            "tier": result.tier,
            "recommendation": result.recommendation(),
            "comments_analyzed": result.comments_analyzed,
            "sentiments": sentiments,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    print_scores(&texts, &result);
    Ok(())
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

fn print_scores(texts: &[String], result: &tubegrade_core::scoring::ScoreResult) {
    use colored::Colorize;

    for text in texts {
        let sentiment = comment_sentiment(text);
        let label = format!("{:+.2}", sentiment);
        let label = if sentiment > 0.0 {
            label.green()
        } else if sentiment < 0.0 {
            label.red()
        } else {
            label.dimmed()
        };
        println!("  [{}] {}", label, text);
    }

    println!();
    println!(
        "Quality Score: {} ({} comments)",
        format!("{:.1}/10", result.quality_score).bold(),
        result.comments_analyzed
    );
    println!("{}", result.recommendation());
}

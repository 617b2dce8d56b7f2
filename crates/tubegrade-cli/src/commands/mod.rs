//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod analyze;
pub mod config;
pub mod list;
pub mod sample;
pub mod score;
pub mod show;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tubegrade_core::config::Config;

/// tubegrade - Video catalog and comment quality scoring
#[derive(Debug, Parser)]
#[command(name = "tubegrade")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a video's comments and print the analysis report
    Analyze(analyze::AnalyzeArgs),

    /// Score ad-hoc comment texts
    Score(score::ScoreArgs),

    /// List catalog records
    List(list::ListArgs),

    /// Show a video with its comments and stored analysis
    Show(show::ShowArgs),

    /// Write a demonstration catalog file
    Sample(sample::SampleArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let app_config = load_config(cli.config.as_deref())?;

    // Dispatch to command handler
    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, &app_config),
        Commands::Score(args) => score::execute(args),
        Commands::List(args) => list::execute(args, &app_config),
        Commands::Show(args) => show::execute(args, &app_config),
        Commands::Sample(args) => sample::execute(args),
        Commands::Config(cmd) => config::execute(cmd),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Local configuration path checked before the user config directory
pub(crate) fn local_config_path() -> PathBuf {
    PathBuf::from(".tubegrade/config.toml")
}

/// Load configuration: explicit path, then local, then user config
/// directory, then built-in defaults
fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    use anyhow::Context;

    if let Some(path) = explicit {
        return Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }

    let local = local_config_path();
    if local.exists() {
        return Config::load(&local)
            .with_context(|| format!("Failed to load config from {}", local.display()));
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "tubegrade") {
        let path = dirs.config_dir().join("config.toml");
        if path.exists() {
            return Config::load(&path)
                .with_context(|| format!("Failed to load config from {}", path.display()));
        }
    }

    Ok(Config::default())
}

/// Resolve the catalog path from an argument or the configured default
pub(crate) fn resolve_catalog_path(arg: Option<PathBuf>, config: &Config) -> PathBuf {
    arg.unwrap_or_else(|| config.catalog.default_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_resolve_catalog_path() {
        let config = Config::default();
        assert_eq!(
            resolve_catalog_path(None, &config),
            PathBuf::from("catalog.json")
        );
        assert_eq!(
            resolve_catalog_path(Some(PathBuf::from("other.json")), &config),
            PathBuf::from("other.json")
        );
    }
}

//! Config command
//!
//! Manage tubegrade configuration.

use anyhow::{Context, Result};
use clap::Subcommand;

use tubegrade_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json),
        ConfigCommand::Init { force } => init_config(force),
    }
}

fn show_config(as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = super::local_config_path();
    let config = if config_path.exists() {
        Config::load(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?
    } else {
        Config::default()
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if config_path.exists() {
        println!("{}", config_path.display().to_string().dimmed());
    } else {
        println!("{}", "(built-in defaults)".dimmed());
    }
    println!();
    println!("{}", config.to_toml()?);
    Ok(())
}

fn init_config(force: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = super::local_config_path();

    if config_path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use {} to overwrite.",
            "⚠".yellow(),
            config_path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    Config::default()
        .save(&config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} Default configuration written to {}",
        "✓".green(),
        config_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_command_show() {
        let _cmd = ConfigCommand::Show { json: false };
    }

    #[test]
    fn test_config_command_init() {
        let _cmd = ConfigCommand::Init { force: true };
    }
}

//! CLI for the PDS phishing URL detector.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pds_core::config;

use commands::{run_check, run_completions, run_health, run_inspect};

/// Top-level CLI for the PDS phishing URL detector.
#[derive(Debug, Parser)]
#[command(name = "pds")]
#[command(about = "PDS: phishing URL detector with remote prediction and local fallback", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Classify one or more URLs (remote service first, local rules on failure).
    Check {
        /// URLs to classify, handled one at a time in the given order.
        #[arg(required = true)]
        urls: Vec<String>,

        /// Override the configured prediction service endpoint.
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Print verdicts as a JSON array instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Show a URL's anatomy and local rule breakdown, no network involved.
    Inspect {
        /// URL to analyze.
        url: String,
    },

    /// Probe the prediction service's health endpoint.
    Health {
        /// Override the configured prediction service endpoint.
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,
    },

    /// Generate shell completions to stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check { urls, endpoint, json } => {
                run_check(&cfg, &urls, endpoint.as_deref(), json).await?;
            }
            CliCommand::Inspect { url } => run_inspect(&url)?,
            CliCommand::Health { endpoint } => run_health(&cfg, endpoint.as_deref()).await?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

//! CLI for the HTD hall-ticket downloader.

mod commands;
mod prompt;
mod request;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use htd_core::config;
use htd_core::filename::FileLayout;
use std::path::PathBuf;

use commands::{run_fetch, run_plan};
use prompt::Prompter;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "htd")]
#[command(about = "HTD: batch downloader for exam hall tickets", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/htd/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Identifier range selection shared by `fetch` and `plan`.
///
/// Without `--branch` the command runs interactively and prompts for the
/// branch, prefix, start and end (flags still take precedence).
#[derive(Debug, Clone, Default, Args)]
pub struct RangeArgs {
    /// Branch code, e.g. 66, 05, 12.
    #[arg(long, short)]
    pub branch: Option<String>,
    /// Identifier prefix (college code and batch year). Defaults to the configured prefix.
    #[arg(long)]
    pub prefix: Option<String>,
    /// First suffix, inclusive: 01-99 or A0-Z9.
    #[arg(long, short)]
    pub start: Option<String>,
    /// Last suffix, inclusive: 01-99 or A0-Z9.
    #[arg(long, short)]
    pub end: Option<String>,
    /// Stop the letter range at this suffix, e.g. K6.
    #[arg(long, value_name = "SUFFIX")]
    pub limit: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download hall tickets for a range of identifiers.
    Fetch {
        #[command(flatten)]
        range: RangeArgs,
        /// Directory to save tickets in (overrides config).
        #[arg(long, short, value_name = "DIR")]
        output: Option<PathBuf>,
        /// Save into a per-batch subfolder using prefix_branch_suffix names.
        #[arg(long)]
        batch_folder: bool,
        /// Seconds to wait before each lookup (overrides config).
        #[arg(long, value_name = "SECS")]
        delay: Option<f64>,
        /// Start without asking for confirmation.
        #[arg(long, short)]
        yes: bool,
    },

    /// List the identifiers a fetch would process. No network access.
    Plan {
        #[command(flatten)]
        range: RangeArgs,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let mut prompter = Prompter::stdio();

        match cli.command {
            CliCommand::Fetch {
                range,
                output,
                batch_folder,
                delay,
                yes,
            } => {
                if let Some(dir) = output {
                    cfg.output_dir = dir;
                }
                if batch_folder {
                    cfg.layout = FileLayout::BatchFolder;
                }
                if let Some(secs) = delay {
                    cfg.delay_secs = secs;
                }
                run_fetch(&cfg, &range, yes, &mut prompter)?;
            }
            CliCommand::Plan { range } => run_plan(&cfg, &range, &mut prompter)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

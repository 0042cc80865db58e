//! CLI for the setfetch image set downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use setfetch_core::config::{self, FetchConfig, Resolution, SetfetchConfig};
use std::path::{Path, PathBuf};

use commands::{run_download, run_plan, run_sets};

/// Top-level CLI for setfetch.
#[derive(Debug, Parser)]
#[command(name = "setfetch")]
#[command(about = "setfetch: download image sets listed in a remote manifest", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of ~/.config/setfetch/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every image of the given sets into Set_<id> folders.
    Download {
        /// Set ids to download, comma-separated or repeated (e.g. --sets 1,2,3).
        #[arg(long, short, required = true, value_delimiter = ',', value_name = "ID")]
        sets: Vec<u32>,

        /// Image resolution: 612x612, 800x800 or 1024x1024 (default from config, else 1024x1024).
        #[arg(long, short, value_name = "WxH")]
        resolution: Option<Resolution>,

        /// Output directory (default from config, else the current directory).
        #[arg(long, short, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Print the files that would be fetched without downloading anything.
        #[arg(long)]
        dry_run: bool,
    },

    /// List the sets in the manifest with their row and file counts.
    Sets {
        /// Resolution used to locate the manifest.
        #[arg(long, short, value_name = "WxH")]
        resolution: Option<Resolution>,
    },
}

/// Merge command-line options over the config file.
fn fetch_config(
    cfg: &SetfetchConfig,
    sets: Vec<u32>,
    resolution: Option<Resolution>,
    output: Option<PathBuf>,
    cwd: &Path,
) -> FetchConfig {
    let resolution = resolution.or(cfg.resolution).unwrap_or_default();
    let output = output
        .or_else(|| cfg.output_base.clone())
        .unwrap_or_else(|| cwd.to_path_buf());
    FetchConfig::new(resolution, sets, output).with_repo(cfg.repo.clone())
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Download {
                sets,
                resolution,
                output,
                dry_run,
            } => {
                let cwd = std::env::current_dir()?;
                let fetch_cfg = fetch_config(&cfg, sets, resolution, output, &cwd);
                if dry_run {
                    run_plan(&fetch_cfg)?;
                } else {
                    run_download(&fetch_cfg)?;
                }
            }
            CliCommand::Sets { resolution } => {
                run_sets(&cfg.repo, resolution.or(cfg.resolution).unwrap_or_default())?;
            }
        }

        Ok(())
    }
}

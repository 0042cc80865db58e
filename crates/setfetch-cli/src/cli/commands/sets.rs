//! `setfetch sets` – show which sets the manifest offers.

use anyhow::{Context, Result};
use setfetch_core::config::{RepoConfig, Resolution};
use setfetch_core::{manifest, selection};

pub fn run_sets(repo: &RepoConfig, resolution: Resolution) -> Result<()> {
    let rows = manifest::load_manifest(repo, resolution)
        .context("failed to load set information")?;
    let summary = selection::summarize_sets(&rows);
    if summary.is_empty() {
        println!("Manifest has no rows.");
    } else {
        println!("{:<6} {:<6} {}", "SET", "ROWS", "FILES");
        for s in summary {
            println!("{:<6} {:<6} {}", s.set_id, s.rows, s.files);
        }
    }
    Ok(())
}

//! `setfetch download --dry-run` – list planned files without fetching them.

use anyhow::{Context, Result};
use setfetch_core::config::FetchConfig;
use setfetch_core::{manifest, plan, selection};

pub fn run_plan(cfg: &FetchConfig) -> Result<()> {
    let rows = manifest::load_manifest(&cfg.repo, cfg.resolution)
        .context("failed to load set information")?;
    let selected = selection::select_rows(&rows, &cfg.subsets);
    let tasks = plan::plan_tasks(&selected, cfg)?;
    if tasks.is_empty() {
        println!("Nothing to download.");
        return Ok(());
    }
    for task in &tasks {
        println!("{} -> {}", task.remote_url, task.local_path().display());
    }
    println!("{} file(s) from {} row(s).", tasks.len(), selected.len());
    Ok(())
}

//! Load → select → fetch, once per invocation.

use std::fs;

use anyhow::{Context, Result};

use crate::config::FetchConfig;
use crate::fetch::{self, FetchOutcome, SkipReason};
use crate::layout;
use crate::manifest::{self, ManifestRow};
use crate::plan::{self, DownloadTask};
use crate::selection;

/// Receives per-file progress from [`run`]. All methods default to no-ops.
pub trait FetchObserver {
    /// Called once after the manifest is loaded and filtered, before any download.
    fn on_selected(&mut self, _total_rows: usize, _selected_rows: usize, _tasks: usize) {}
    fn on_saved(&mut self, _task: &DownloadTask, _bytes: u64) {}
    fn on_skipped(&mut self, _task: &DownloadTask, _reason: &SkipReason) {}
}

/// Counts for one finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_selected: usize,
    /// Subsets that had at least one selected row (one folder each).
    pub sets: Vec<u32>,
    pub planned: usize,
    pub saved: usize,
    pub skipped: usize,
}

/// Runs the whole workflow for `cfg`.
///
/// Manifest failures and folder creation failures abort the run; a file that
/// cannot be fetched or written is reported to `observer` and skipped.
pub fn run(cfg: &FetchConfig, observer: &mut dyn FetchObserver) -> Result<RunSummary> {
    let rows = manifest::load_manifest(&cfg.repo, cfg.resolution)
        .context("failed to load set information")?;
    let selected = selection::select_rows(&rows, &cfg.subsets);

    let absent = selection::absent_sets(&rows, &cfg.subsets);
    if !absent.is_empty() {
        tracing::debug!(?absent, "requested sets not in manifest");
    }

    run_rows(rows.len(), &selected, cfg, observer)
}

/// Downloads `selected` rows (already filtered). `total_rows` is for reporting only.
pub fn run_rows(
    total_rows: usize,
    selected: &[ManifestRow],
    cfg: &FetchConfig,
    observer: &mut dyn FetchObserver,
) -> Result<RunSummary> {
    let tasks = plan::plan_tasks(selected, cfg)?;
    observer.on_selected(total_rows, selected.len(), tasks.len());

    let mut summary = RunSummary {
        rows_selected: selected.len(),
        planned: tasks.len(),
        ..RunSummary::default()
    };

    for row in selected {
        if !summary.sets.contains(&row.set_id) {
            summary.sets.push(row.set_id);
        }
    }
    for &set_id in &summary.sets {
        let dir = layout::set_dir(&cfg.output_base, set_id);
        fs::create_dir_all(&dir)
            .with_context(|| format!("cannot create set folder {}", dir.display()))?;
    }

    for task in &tasks {
        match fetch::fetch_task(task) {
            FetchOutcome::Saved { bytes } => {
                tracing::info!(path = %task.local_path().display(), bytes, "downloaded");
                summary.saved += 1;
                observer.on_saved(task, bytes);
            }
            FetchOutcome::Skipped(reason) => {
                tracing::warn!(url = %task.remote_url, %reason, "skipped");
                summary.skipped += 1;
                observer.on_skipped(task, &reason);
            }
        }
    }

    tracing::info!(
        saved = summary.saved,
        skipped = summary.skipped,
        "run finished"
    );
    Ok(summary)
}

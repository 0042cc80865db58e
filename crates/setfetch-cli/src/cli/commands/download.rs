//! `setfetch download` – fetch the selected sets into the output directory.

use anyhow::Result;
use setfetch_core::config::FetchConfig;
use setfetch_core::fetch::SkipReason;
use setfetch_core::plan::DownloadTask;
use setfetch_core::workflow::{self, FetchObserver, RunSummary};
use std::io::{self, Write};

/// Prints one line per file: progress to `out`, warnings to `err`.
struct ConsoleObserver<'a, O: Write, E: Write> {
    cfg: &'a FetchConfig,
    out: O,
    err: E,
}

impl<O: Write, E: Write> FetchObserver for ConsoleObserver<'_, O, E> {
    fn on_selected(&mut self, total_rows: usize, selected_rows: usize, tasks: usize) {
        let sets: Vec<u32> = self.cfg.subsets.iter().copied().collect();
        let _ = writeln!(
            self.out,
            "Downloading sets {:?} at resolution {}: {} of {} rows, {} files...",
            sets, self.cfg.resolution, selected_rows, total_rows, tasks
        );
    }

    fn on_saved(&mut self, task: &DownloadTask, _bytes: u64) {
        let _ = writeln!(self.out, "Downloaded {}", task.local_path().display());
    }

    fn on_skipped(&mut self, task: &DownloadTask, reason: &SkipReason) {
        let _ = writeln!(
            self.err,
            "warning: failed to download {} ({})",
            task.remote_url, reason
        );
    }
}

/// Closing lines printed after every completed run.
fn write_summary(out: &mut impl Write, summary: &RunSummary) -> io::Result<()> {
    if summary.skipped > 0 {
        writeln!(
            out,
            "{} of {} file(s) could not be downloaded.",
            summary.skipped, summary.planned
        )?;
    }
    writeln!(out, "Download complete.")
}

pub fn run_download(cfg: &FetchConfig) -> Result<()> {
    println!(
        "Loading set information from {}/{} ({})...",
        cfg.repo.user, cfg.repo.repo, cfg.repo.branch
    );
    let mut observer = ConsoleObserver {
        cfg,
        out: io::stdout(),
        err: io::stderr(),
    };
    let summary = workflow::run(cfg, &mut observer)?;
    write_summary(&mut io::stdout(), &summary)?;
    Ok(())
}

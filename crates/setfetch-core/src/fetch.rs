//! Fetch one planned file and write it into its set folder.
//!
//! Nothing here is fatal: every failure becomes a [`SkipReason`] so the
//! caller can warn and move on to the next file.

use std::fmt;
use std::fs;

use crate::http;
use crate::layout;
use crate::plan::DownloadTask;

/// Result of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Saved { bytes: u64 },
    Skipped(SkipReason),
}

/// Why a file was not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Server answered with something other than 200.
    Status(u32),
    /// Request never produced a response (DNS, connect, timeout).
    Transport(String),
    /// Saved name would escape the set folder or is not a valid file name.
    UnsafeName,
    /// Body was received but could not be written.
    Write(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Status(code) => write!(f, "status {}", code),
            SkipReason::Transport(e) => write!(f, "transport error: {}", e),
            SkipReason::UnsafeName => write!(f, "unsafe file name"),
            SkipReason::Write(e) => write!(f, "write failed: {}", e),
        }
    }
}

/// GETs `task.remote_url` and, on 200, overwrites `task.local_path()` with the body.
///
/// The set folder must already exist.
pub fn fetch_task(task: &DownloadTask) -> FetchOutcome {
    if !layout::is_safe_file_name(&task.file_name) {
        return FetchOutcome::Skipped(SkipReason::UnsafeName);
    }

    let response = match http::get(&task.remote_url) {
        Ok(r) => r,
        Err(e) => return FetchOutcome::Skipped(SkipReason::Transport(e.to_string())),
    };
    if !response.is_ok() {
        return FetchOutcome::Skipped(SkipReason::Status(response.status));
    }

    let path = task.local_path();
    match fs::write(&path, &response.body) {
        Ok(()) => FetchOutcome::Saved {
            bytes: response.body.len() as u64,
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), "write failed: {}", e);
            FetchOutcome::Skipped(SkipReason::Write(e.to_string()))
        }
    }
}

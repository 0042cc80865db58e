//! CLI command handlers, one file per command.

mod download;
mod plan;
mod sets;

pub use download::run_download;
pub use plan::run_plan;
pub use sets::run_sets;

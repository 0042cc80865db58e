//! Manifest loading: one remote GET, then fixed-schema decoding.
//!
//! The manifest is a comma-delimited table with (at least) the columns
//! `Set`, `mem_role`, `scene_cat` and `sim_cat`. Any failure here is fatal
//! to the run.

mod error;
mod parse;

use serde::Deserialize;

use crate::config::{RepoConfig, Resolution};
use crate::http;
use crate::layout;

pub use error::ManifestError;
pub use parse::{parse_manifest, REQUIRED_COLUMNS};

/// One image instance described by the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestRow {
    #[serde(rename = "Set")]
    pub set_id: u32,
    /// Role label as written in the manifest (e.g. `Target`, `Foil`, `lure`).
    #[serde(rename = "mem_role")]
    pub role: String,
    #[serde(rename = "scene_cat")]
    pub scene_category: String,
    #[serde(rename = "sim_cat")]
    pub similarity_category: String,
}

/// Fetches the manifest for `resolution` and decodes every row.
pub fn load_manifest(
    repo: &RepoConfig,
    resolution: Resolution,
) -> Result<Vec<ManifestRow>, ManifestError> {
    let url = layout::manifest_url(repo, resolution)
        .map_err(|_| ManifestError::BaseUrl(repo.base_url.clone()))?;
    let url = url.as_str();
    tracing::info!(url, "fetching manifest");

    let response = http::get(url).map_err(|source| ManifestError::Transport {
        url: url.to_string(),
        source,
    })?;
    if !response.is_ok() {
        return Err(ManifestError::Http {
            url: url.to_string(),
            status: response.status,
        });
    }

    let rows = parse_manifest(response.body.as_slice())?;
    tracing::info!(rows = rows.len(), "manifest loaded");
    Ok(rows)
}

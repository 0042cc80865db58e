//! Remote URL and local path derivation.
//!
//! Remote: `{base_url}/{user}/{repo}/{branch}/{images_dir}/{resolution}/{scene}_{sim}_{n}.{ext}`.
//! Local: `{output_base}/Set_{id}/{role}_{scene}_{sim}_{n}.{ext}`.

use std::path::{Path, PathBuf};

use url::Url;

use crate::config::{RepoConfig, Resolution};
use crate::manifest::ManifestRow;
use crate::variants;

/// Linux NAME_MAX.
const NAME_MAX: usize = 255;

/// Builds `{base_url}/{user}/{repo}/{branch}/` followed by `path`, split on `/`.
/// Each segment is percent-encoded, so a space in `path` becomes `%20`.
pub fn repo_file_url<'a>(
    repo: &RepoConfig,
    path: impl IntoIterator<Item = &'a str>,
) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&repo.base_url)?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?;
        segments.pop_if_empty();
        segments.extend([repo.user.as_str(), repo.repo.as_str(), repo.branch.as_str()]);
        segments.extend(path.into_iter().filter(|s| !s.is_empty()));
    }
    Ok(url)
}

/// URL of the manifest. `{resolution}` in the configured path is substituted.
pub fn manifest_url(repo: &RepoConfig, resolution: Resolution) -> Result<Url, url::ParseError> {
    let path = repo
        .manifest_path
        .replace("{resolution}", resolution.as_str());
    repo_file_url(repo, path.split('/'))
}

/// Source file name for one variant of a row, e.g. `beach_A_1.png`.
pub fn image_file_name(row: &ManifestRow, variant: u8, extension: &str) -> String {
    format!(
        "{}_{}{}.{}",
        row.scene_category,
        row.similarity_category,
        variants::suffix(variant),
        extension
    )
}

/// URL of an image file at a given resolution.
pub fn image_url(
    repo: &RepoConfig,
    resolution: Resolution,
    file_name: &str,
) -> Result<Url, url::ParseError> {
    let path = repo
        .images_dir
        .split('/')
        .chain([resolution.as_str(), file_name]);
    repo_file_url(repo, path)
}

/// Folder name for a subset, e.g. `Set_3`.
pub fn set_dir_name(set_id: u32) -> String {
    format!("Set_{set_id}")
}

pub fn set_dir(output_base: &Path, set_id: u32) -> PathBuf {
    output_base.join(set_dir_name(set_id))
}

/// Saved file name: the role prefixed to the source file name.
pub fn local_file_name(row: &ManifestRow, image_file_name: &str) -> String {
    format!("{}_{}", row.role, image_file_name)
}

/// True if `name` is a single path component safe to create inside a set folder.
///
/// Rejects separators, NUL, control characters, `.`/`..` and names over NAME_MAX.
pub fn is_safe_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && name.len() <= NAME_MAX
        && !name
            .chars()
            .any(|c| c == '/' || c == '\\' || c == '\0' || c.is_control())
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Result;

/// Errors raised while building or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown resolution {0:?} (expected one of: 612x612, 800x800, 1024x1024)")]
    UnknownResolution(String),
    #[error("cannot read config {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Image resolutions published in the repository's `images/` tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "612x612")]
    R612,
    #[serde(rename = "800x800")]
    R800,
    #[default]
    #[serde(rename = "1024x1024")]
    R1024,
}

impl Resolution {
    pub const ALL: [Resolution; 3] = [Resolution::R612, Resolution::R800, Resolution::R1024];

    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::R612 => "612x612",
            Resolution::R800 => "800x800",
            Resolution::R1024 => "1024x1024",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resolution {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resolution::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownResolution(s.to_string()))
    }
}

/// Where the manifest and images live on the remote file host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Scheme and host of the raw file server, without trailing slash.
    pub base_url: String,
    pub user: String,
    pub repo: String,
    pub branch: String,
    /// Manifest path inside the repository. `{resolution}` is substituted if present.
    pub manifest_path: String,
    /// Directory holding one subdirectory per resolution.
    pub images_dir: String,
    pub image_extension: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com".to_string(),
            user: "G-Radman".to_string(),
            repo: "MJ-SceneMST".to_string(),
            branch: "main".to_string(),
            manifest_path: "image sets/set_information.csv".to_string(),
            images_dir: "images".to_string(),
            image_extension: "png".to_string(),
        }
    }
}

/// On-disk configuration loaded from `~/.config/setfetch/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetfetchConfig {
    /// Resolution used when the command line does not name one.
    pub resolution: Option<Resolution>,
    /// Output directory used when the command line does not name one.
    pub output_base: Option<PathBuf>,
    pub repo: RepoConfig,
}

/// Everything one workflow run needs, passed explicitly to [`crate::workflow::run`].
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub resolution: Resolution,
    pub subsets: BTreeSet<u32>,
    pub output_base: PathBuf,
    pub repo: RepoConfig,
}

impl FetchConfig {
    pub fn new(
        resolution: Resolution,
        subsets: impl IntoIterator<Item = u32>,
        output_base: impl Into<PathBuf>,
    ) -> Self {
        Self {
            resolution,
            subsets: subsets.into_iter().collect(),
            output_base: output_base.into(),
            repo: RepoConfig::default(),
        }
    }

    pub fn with_repo(mut self, repo: RepoConfig) -> Self {
        self.repo = repo;
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("setfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SetfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SetfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    Ok(load_from_path(&path)?)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from_path(path: &Path) -> Result<SetfetchConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

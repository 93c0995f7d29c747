//! Runtime configuration.
//!
//! There is no configuration file. Settings come from environment variables:
//! - `GTFO_LOOKUP_MIRROR` - Local mirror directory (default: platform data dir)
//! - `GTFO_LOOKUP_REPO_URL` - Repository to clone (default: upstream GTFOBins)

use std::path::PathBuf;

use crate::error::MirrorError;

/// Upstream knowledge base repository.
pub const DEFAULT_REPO_URL: &str = "https://github.com/GTFOBins/GTFOBins.github.io.git";

/// Directory name of the clone inside the data directory.
const MIRROR_DIR_NAME: &str = "GTFOBins.github.io";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mirror_dir: PathBuf,
    pub repo_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, MirrorError> {
        let mirror_dir = match std::env::var_os("GTFO_LOOKUP_MIRROR") {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_mirror_dir()?,
        };
        let repo_url = std::env::var("GTFO_LOOKUP_REPO_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REPO_URL.to_string());

        Ok(Self {
            mirror_dir,
            repo_url,
        })
    }

    /// Create with explicit configuration.
    pub fn new(mirror_dir: impl Into<PathBuf>, repo_url: impl Into<String>) -> Self {
        Self {
            mirror_dir: mirror_dir.into(),
            repo_url: repo_url.into(),
        }
    }

    pub fn with_mirror_dir(mut self, mirror_dir: impl Into<PathBuf>) -> Self {
        self.mirror_dir = mirror_dir.into();
        self
    }
}

fn default_mirror_dir() -> Result<PathBuf, MirrorError> {
    let dirs =
        directories::ProjectDirs::from("", "", "gtfo-lookup").ok_or(MirrorError::NoDataDir)?;
    Ok(dirs.data_dir().join(MIRROR_DIR_NAME))
}

use std::path::PathBuf;

use thiserror::Error;

/// Errors that end a lookup.
///
/// An empty result for a recognized category is not an error; it comes back
/// as an empty [`crate::models::LookupResult`].
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Local copy of GTFOBins not found, run `gtfo update` first")]
    MirrorMissing,

    #[error("{0} was not found in the local copy of GTFOBins")]
    BinaryNotFound(String),

    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    #[error("Could not parse document for {binary}: {source}")]
    Parse {
        binary: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to read local copy of GTFOBins: {0}")]
    Io(#[from] std::io::Error),
}

/// A document exists but its structure cannot be interpreted.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing front matter block")]
    MissingFrontMatter,

    #[error("invalid front matter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("front matter is not a mapping")]
    NotAMapping,

    #[error("no `functions` section")]
    MissingFunctions,
}

/// Errors from maintaining the local mirror.
#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("git is not installed or not on PATH")]
    GitNotInstalled,

    #[error("git command failed: {0}")]
    GitFailed(String),

    #[error("Mirror path {} exists but is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not determine data directory")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

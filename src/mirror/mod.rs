//! Local mirror of the GTFOBins repository.
//!
//! Lookups only need two things from the mirror, captured by [`DocumentSource`]:
//! whether it exists, and the raw text of one binary's document. Keeping the
//! mirror current (`update`) and removing it (`purge`) live on [`Mirror`].

mod git;

use std::io;
use std::path::{Path, PathBuf};

use crate::error::MirrorError;

/// Directory inside the repository holding one document per binary.
const DOCUMENTS_DIR: &str = "_gtfobins";

/// Extension of per-binary documents.
const DOCUMENT_EXT: &str = "md";

/// Read access to per-binary documents.
pub trait DocumentSource {
    /// Whether a local copy of the knowledge base is present.
    fn exists(&self) -> bool;

    /// Raw document text for `binary`, or `None` if the knowledge base has no such binary.
    fn read_document(&self, binary: &str) -> io::Result<Option<String>>;
}

/// Result of [`Mirror::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Cloned,
    UpToDate,
    Updated { from: String, to: String },
}

/// Result of [`Mirror::purge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeOutcome {
    Removed,
    NotFound,
}

/// A git checkout of the knowledge base on local disk.
#[derive(Debug, Clone)]
pub struct Mirror {
    root: PathBuf,
}

impl Mirror {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the document for `binary`, or `None` if the name cannot be a plain file name.
    pub fn document_path(&self, binary: &str) -> Option<PathBuf> {
        if binary.is_empty()
            || binary == "."
            || binary.contains("..")
            || binary.contains('/')
            || binary.contains('\\')
            || binary.contains('\0')
        {
            return None;
        }
        Some(
            self.root
                .join(DOCUMENTS_DIR)
                .join(format!("{binary}.{DOCUMENT_EXT}")),
        )
    }

    /// Whether the mirror directory is present. A non-directory at the mirror path is an error.
    async fn is_present(&self) -> Result<bool, MirrorError> {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(true),
            Ok(_) => Err(MirrorError::NotADirectory(self.root.clone())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(MirrorError::Io(e)),
        }
    }

    /// Clone the repository if absent, otherwise pull and report whether HEAD moved.
    pub async fn update(&self, repo_url: &str) -> Result<UpdateOutcome, MirrorError> {
        if !self.is_present().await? {
            tracing::info!(url = repo_url, dir = %self.root.display(), "cloning mirror");
            if let Some(parent) = self.root.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            git::clone(repo_url, &self.root).await?;
            return Ok(UpdateOutcome::Cloned);
        }

        let before = git::head(&self.root).await?;
        git::pull(&self.root).await?;
        let after = git::head(&self.root).await?;

        if before == after {
            tracing::info!(head = %after, "mirror up to date");
            Ok(UpdateOutcome::UpToDate)
        } else {
            tracing::info!(from = %before, to = %after, "mirror updated");
            Ok(UpdateOutcome::Updated {
                from: before,
                to: after,
            })
        }
    }

    /// Remove the local copy entirely.
    pub async fn purge(&self) -> Result<PurgeOutcome, MirrorError> {
        if !self.is_present().await? {
            return Ok(PurgeOutcome::NotFound);
        }
        tokio::fs::remove_dir_all(&self.root).await?;
        tracing::info!(dir = %self.root.display(), "mirror removed");
        Ok(PurgeOutcome::Removed)
    }
}

impl DocumentSource for Mirror {
    fn exists(&self) -> bool {
        self.root.is_dir()
    }

    fn read_document(&self, binary: &str) -> io::Result<Option<String>> {
        let Some(path) = self.document_path(binary) else {
            return Ok(None);
        };
        tracing::debug!(path = %path.display(), "reading document");
        match std::fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

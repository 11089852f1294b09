//! Filesystem adapter for the `ServiceFilesystem` port.
//!
//! `ServiceDirectory` owns the service root and rejects relative paths that
//! escape it.

mod service_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;
use crate::domain::paths::normalize_path;

/// Filesystem-backed service directory.
#[derive(Debug, Clone)]
pub struct ServiceDirectory {
    root: PathBuf,
}

impl ServiceDirectory {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store rooted at the current working directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl ServiceDirectory {
    /// Relative paths must stay within the root after logical normalization.
    pub(crate) fn checked_path(&self, path: &Path) -> Result<PathBuf, AppError> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }

        let escapes = path.components().any(|c| matches!(c, Component::ParentDir))
            && !normalize_path(&self.root.join(path)).starts_with(normalize_path(&self.root));
        if escapes {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(self.root.join(path))
    }
}

//! Service-level filesystem operations.
//!
//! Relative paths are resolved against the service root and must stay
//! inside it. Absolute paths are taken as given.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for file I/O scoped to a service directory.
pub trait ServiceFilesystem {
    /// The service root directory.
    fn root(&self) -> &Path;

    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &Path) -> Result<String, AppError>;

    /// Replace a file's content in a single overwrite, creating parent
    /// directories as needed.
    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Write a file that must not exist yet, creating parent directories as
    /// needed. Fails with `ArtifactExists` and leaves the existing file alone.
    fn create_new_file(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Resolve a path against the service root.
    fn resolve_path(&self, path: &Path) -> PathBuf {
        self.root().join(path)
    }
}

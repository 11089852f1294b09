//! `ServiceFilesystem` implementation for `ServiceDirectory`.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ServiceFilesystem;

use super::ServiceDirectory;

impl ServiceFilesystem for ServiceDirectory {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        let full_path = self.checked_path(path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Stage next to the target so the rename stays on one filesystem.
        let mut staged = full_path.clone().into_os_string();
        staged.push(".sls-resolver.tmp");
        fs::write(&staged, content)?;
        if let Err(err) = fs::rename(&staged, &full_path) {
            let _ = fs::remove_file(&staged);
            return Err(err.into());
        }
        Ok(())
    }

    fn create_new_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&full_path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                return Err(AppError::ArtifactExists(path.display().to_string()));
            }
            Err(err) => return Err(err.into()),
        };
        file.write_all(content.as_bytes()).map_err(AppError::from)
    }

    fn file_exists(&self, path: &Path) -> bool {
        match self.checked_path(path) {
            Ok(full_path) => full_path.exists(),
            Err(_) => false,
        }
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let full_path = self.checked_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }
}

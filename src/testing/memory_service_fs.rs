//! In-memory `ServiceFilesystem` for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ServiceFilesystem;

/// Files are keyed by their path relative to `root`, with `/` separators.
#[derive(Debug)]
pub struct MemoryServiceFs {
    root: PathBuf,
    files: RefCell<BTreeMap<String, String>>,
    dirs: RefCell<BTreeSet<String>>,
    writes: Cell<usize>,
}

impl MemoryServiceFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            files: RefCell::new(BTreeMap::new()),
            dirs: RefCell::new(BTreeSet::new()),
            writes: Cell::new(0),
        }
    }

    /// Seed a file without counting it as a write.
    pub fn add(&self, path: &str, content: &str) {
        self.files.borrow_mut().insert(self.key(Path::new(path)), content.to_string());
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.files.borrow().get(&self.key(Path::new(path))).cloned()
    }

    /// Number of writes performed through the port.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }

    fn key(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .filter(|c| c != "/")
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl ServiceFilesystem for MemoryServiceFs {
    fn root(&self) -> &Path {
        &self.root
    }

    fn read_file(&self, path: &Path) -> Result<String, AppError> {
        self.files.borrow().get(&self.key(path)).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        self.writes.set(self.writes.get() + 1);
        self.files.borrow_mut().insert(self.key(path), content.to_string());
        Ok(())
    }

    fn create_new_file(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let key = self.key(path);
        if self.files.borrow().contains_key(&key) {
            return Err(AppError::ArtifactExists(path.display().to_string()));
        }
        self.write_file(path, content)
    }

    fn file_exists(&self, path: &Path) -> bool {
        let key = self.key(path);
        if self.files.borrow().contains_key(&key) || self.dirs.borrow().contains(&key) {
            return true;
        }
        let prefix = format!("{}/", key);
        self.files.borrow().keys().any(|k| k.starts_with(&prefix))
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        self.dirs.borrow_mut().insert(self.key(path));
        Ok(())
    }
}

//! Read-modify-write of the resolver manifest.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, RESOLVER_MANIFEST_FILE, ResolverDefinition, ResolverManifest};
use crate::ports::ServiceFilesystem;

/// A manifest with one resolver appended in memory, not yet written.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingManifest {
    path: PathBuf,
    manifest: ResolverManifest,
}

impl PendingManifest {
    pub fn manifest(&self) -> &ResolverManifest {
        &self.manifest
    }

    /// Overwrite the manifest file with the full updated list.
    pub fn commit<F: ServiceFilesystem>(self, fs: &F) -> Result<ResolverManifest, AppError> {
        let content = self.manifest.to_yaml()?;
        fs.write_file(&self.path, &content)?;
        debug!(path = %self.path.display(), "resolver manifest written");
        Ok(self.manifest)
    }
}

pub fn load_manifest<F: ServiceFilesystem>(
    fs: &F,
    path: &Path,
) -> Result<ResolverManifest, AppError> {
    if !fs.file_exists(path) {
        return Err(AppError::ManifestNotFound(path.display().to_string()));
    }
    let content = fs.read_file(path)?;
    ResolverManifest::parse(&content, &path.display().to_string())
}

/// Load the manifest and append `resolver` in memory.
///
/// Fails with `DuplicateResolver` when the field is already registered.
pub fn prepare_append<F: ServiceFilesystem>(
    fs: &F,
    path: &Path,
    resolver: &ResolverDefinition,
) -> Result<PendingManifest, AppError> {
    let mut manifest = load_manifest(fs, path)?;
    manifest.append(resolver)?;
    Ok(PendingManifest { path: path.to_path_buf(), manifest })
}

/// Append a resolver to the manifest and persist it.
pub fn append_resolver<F: ServiceFilesystem>(
    fs: &F,
    path: &Path,
    resolver: &ResolverDefinition,
) -> Result<ResolverManifest, AppError> {
    prepare_append(fs, path, resolver)?.commit(fs)
}

/// `resolvers.yml` at the service root.
pub fn default_manifest_path() -> PathBuf {
    PathBuf::from(RESOLVER_MANIFEST_FILE)
}

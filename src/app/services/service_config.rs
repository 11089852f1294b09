use std::path::Path;

use crate::domain::{AppError, SERVICE_CONFIG_FILE, ServiceConfig};
use crate::ports::ServiceFilesystem;

/// Load `serverless.yml` from the service root.
pub fn load_service_config<F: ServiceFilesystem>(fs: &F) -> Result<ServiceConfig, AppError> {
    let path = Path::new(SERVICE_CONFIG_FILE);
    if !fs.file_exists(path) {
        return Err(AppError::ServiceConfigMissing(fs.resolve_path(path).display().to_string()));
    }
    ServiceConfig::parse(&fs.read_file(path)?)
}

/// Like `load_service_config`, but a missing file yields an empty config.
///
/// Scaffolding only needs `serverless.yml` for template overrides.
pub fn load_service_config_or_default<F: ServiceFilesystem>(
    fs: &F,
) -> Result<ServiceConfig, AppError> {
    match load_service_config(fs) {
        Err(AppError::ServiceConfigMissing(_)) => Ok(ServiceConfig::default()),
        other => other,
    }
}

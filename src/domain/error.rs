use std::io;

use thiserror::Error;

/// Library-wide error type for sls-resolver operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Resolver type is not one of query, mutation or function.
    #[error("Invalid resolver type '{0}': must be one of \"query\", \"mutation\" or \"function\"")]
    InvalidResolverType(String),

    /// The manifest already registers a resolver for this field.
    #[error("Resolver \"{0}\" already exists. Creation aborted.")]
    DuplicateResolver(String),

    /// A generated artifact would overwrite an existing file.
    #[error("File \"{0}\" already exists. Cannot create function.")]
    ArtifactExists(String),

    /// The companion test file already exists.
    #[error("File {0} already exists")]
    TestFileExists(String),

    /// Template file could not be read.
    #[error("Failed to load template '{path}': {details}")]
    TemplateLoad { path: String, details: String },

    /// Template text could not be compiled or rendered.
    #[error("Failed to render template '{name}': {details}")]
    TemplateRender { name: String, details: String },

    /// Resolver manifest (resolvers.yml) missing.
    #[error("Resolver manifest not found: {0}")]
    ManifestNotFound(String),

    /// Service configuration (serverless.yml) missing.
    #[error("Service configuration not found: {0}")]
    ServiceConfigMissing(String),

    /// The external test runner failed or could not be started.
    #[error("Test runner failed: {0}")]
    TestEngine(String),

    /// Path escapes the service root.
    #[error("Path '{0}' escapes the service root")]
    PathTraversal(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidResolverType(_)
            | AppError::TemplateRender { .. }
            | AppError::PathTraversal(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::ManifestNotFound(_)
            | AppError::ServiceConfigMissing(_)
            | AppError::TemplateLoad { .. } => io::ErrorKind::NotFound,
            AppError::DuplicateResolver(_)
            | AppError::ArtifactExists(_)
            | AppError::TestFileExists(_) => io::ErrorKind::AlreadyExists,
            AppError::TestEngine(_) => io::ErrorKind::Other,
        }
    }
}

//! Staging and committing generated resolver files.
//!
//! Artifacts, the companion test included, are rendered and checked against
//! the filesystem before anything is written, so a template or collision
//! failure never leaves a partial set behind.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::domain::paths::{ensure_within_root, request_template_path, schema_path};
use crate::domain::{
    AppError, ResolverPaths, ScaffoldRequest, TemplateContext, TemplateKind, derive_paths,
};
use crate::ports::ServiceFilesystem;

use super::template_renderer::TemplateRenderer;

/// A file to be written: where, what, and which template produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: TemplateKind,
    pub path: PathBuf,
    pub content: String,
}

/// Artifacts for one resolver together with the paths they were derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedResolver {
    pub paths: ResolverPaths,
    pub artifacts: Vec<GeneratedArtifact>,
}

/// Render the handler, request-mapping, schema (Query/Mutation only) and
/// companion test artifacts and verify none of their targets exist.
///
/// `test_path` overrides the default test directory and may contain the
/// `{function}` placeholder.
pub fn stage_resolver_artifacts<F: ServiceFilesystem>(
    fs: &F,
    renderer: &TemplateRenderer<'_, F>,
    request: &ScaffoldRequest,
    test_path: Option<&str>,
) -> Result<StagedResolver, AppError> {
    let paths = derive_paths(fs.root(), &request.type_label, &request.resolver_name, test_path);
    ensure_within_root(fs.root(), &paths.test_dir)?;

    let mut artifacts = vec![
        GeneratedArtifact {
            kind: TemplateKind::FunctionHandler,
            path: paths.handler_file.clone(),
            content: renderer.render(TemplateKind::FunctionHandler, &TemplateContext::handler())?,
        },
        GeneratedArtifact {
            kind: TemplateKind::RequestMapping,
            path: request_template_path(request.resolver_type, &request.resolver_name),
            content: renderer
                .render(TemplateKind::RequestMapping, &TemplateContext::request_mapping(request))?,
        },
    ];

    if request.resolver_type.has_schema() {
        artifacts.push(GeneratedArtifact {
            kind: TemplateKind::SchemaFragment,
            path: schema_path(&request.type_label, &request.resolver_name),
            content: renderer
                .render(TemplateKind::SchemaFragment, &TemplateContext::schema(request))?,
        });
    }

    artifacts.push(stage_test_artifact(renderer, request, &paths)?);

    ensure_targets_free(fs, &artifacts)?;
    Ok(StagedResolver { paths, artifacts })
}

/// Render the companion test file for a resolver.
pub fn stage_test_artifact<F: ServiceFilesystem>(
    renderer: &TemplateRenderer<'_, F>,
    request: &ScaffoldRequest,
    paths: &ResolverPaths,
) -> Result<GeneratedArtifact, AppError> {
    Ok(GeneratedArtifact {
        kind: TemplateKind::TestFile,
        path: paths.test_file.clone(),
        content: renderer.render(TemplateKind::TestFile, &TemplateContext::test(request, paths))?,
    })
}

fn ensure_targets_free<F: ServiceFilesystem>(
    fs: &F,
    artifacts: &[GeneratedArtifact],
) -> Result<(), AppError> {
    for artifact in artifacts {
        if fs.file_exists(&artifact.path) {
            let path = artifact.path.display().to_string();
            return Err(match artifact.kind {
                TemplateKind::TestFile => AppError::TestFileExists(path),
                _ => AppError::ArtifactExists(path),
            });
        }
    }
    Ok(())
}

/// Write every staged artifact with create-new semantics.
///
/// One failed write does not stop the others; the first error is returned
/// after all writes were attempted.
pub fn commit_artifacts<F: ServiceFilesystem>(
    fs: &F,
    artifacts: &[GeneratedArtifact],
) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::with_capacity(artifacts.len());
    let mut first_error = None;

    for artifact in artifacts {
        match fs.create_new_file(&artifact.path, &artifact.content) {
            Ok(()) => {
                debug!(kind = ?artifact.kind, path = %artifact.path.display(), "artifact written");
                written.push(artifact.path.clone());
            }
            Err(err) => {
                warn!(path = %artifact.path.display(), error = %err, "artifact write failed");
                first_error.get_or_insert(err);
            }
        }
    }

    match first_error {
        Some(err) => Err(err),
        None => Ok(written),
    }
}

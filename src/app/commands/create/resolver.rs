use tracing::info;

use crate::app::AppContext;
use crate::app::services::artifact_generator::{commit_artifacts, stage_resolver_artifacts};
use crate::app::services::manifest_updater::{default_manifest_path, prepare_append};
use crate::app::services::service_config::load_service_config_or_default;
use crate::app::services::template_renderer::TemplateRenderer;
use crate::domain::{AppError, ResolverDefinition, ScaffoldRequestBuilder};
use crate::ports::{Prompter, ServiceFilesystem};

use super::CreateResolverOutcome;

/// Options that are never prompted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateResolverOptions {
    pub data_source: Option<String>,
    /// Test directory override; may contain `{function}`.
    pub test_path: Option<String>,
}

/// Scaffold a resolver: collect inputs, register it in `resolvers.yml`, and
/// write its handler, request-mapping, schema and test files.
///
/// Every artifact is rendered and checked for collisions before the
/// manifest is touched; a duplicate field, a template failure, an escaping
/// test path or an existing file aborts the whole operation with nothing
/// written.
pub fn create_resolver<F, P>(
    ctx: &AppContext<F, P>,
    builder: ScaffoldRequestBuilder,
    options: &CreateResolverOptions,
) -> Result<CreateResolverOutcome, AppError>
where
    F: ServiceFilesystem,
    P: Prompter,
{
    let fs = ctx.fs();
    let request = builder.fill_missing(ctx.prompter())?.build()?;
    info!(
        resolver_type = %request.resolver_type,
        field = %request.resolver_name,
        "generating resolver"
    );

    let definition = ResolverDefinition::new(&request, options.data_source.as_deref());
    let pending = prepare_append(fs, &default_manifest_path(), &definition)?;

    let service = load_service_config_or_default(fs)?;
    let renderer = TemplateRenderer::new(fs, &service);
    let staged =
        stage_resolver_artifacts(fs, &renderer, &request, options.test_path.as_deref())?;

    pending.commit(fs)?;
    let written = commit_artifacts(fs, &staged.artifacts)?;

    Ok(CreateResolverOutcome { request, definition, written, test_file: staged.paths.test_file })
}

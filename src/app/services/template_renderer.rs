//! Template lookup and rendering.
//!
//! A project may override any built-in template through
//! `custom.serverless-jest-plugin.<kind>Template` in `serverless.yml`; the
//! path is resolved relative to the service root.

use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use tracing::debug;

use crate::adapters::assets::builtin_template;
use crate::domain::{AppError, ServiceConfig, TemplateContext, TemplateKind};
use crate::ports::ServiceFilesystem;

/// Template text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub name: String,
    pub text: String,
}

pub struct TemplateRenderer<'a, F: ServiceFilesystem> {
    fs: &'a F,
    service: &'a ServiceConfig,
    env: Environment<'static>,
}

impl<'a, F: ServiceFilesystem> TemplateRenderer<'a, F> {
    pub fn new(fs: &'a F, service: &'a ServiceConfig) -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Lenient);
        // Generated sources are not markup; `.js` names must not pick up JSON escaping.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { fs, service, env }
    }

    /// Load the project override if one is configured, else the built-in.
    pub fn load(&self, kind: TemplateKind) -> Result<LoadedTemplate, AppError> {
        if let Some(override_path) = self.service.plugin_setting(kind.override_key()) {
            debug!(kind = ?kind, path = override_path, "using project template override");
            let text = self.fs.read_file(Path::new(override_path)).map_err(|err| {
                AppError::TemplateLoad { path: override_path.to_string(), details: err.to_string() }
            })?;
            return Ok(LoadedTemplate { name: override_path.to_string(), text });
        }

        let text = builtin_template(kind).ok_or_else(|| AppError::TemplateLoad {
            path: kind.builtin_name().to_string(),
            details: "built-in template missing".to_string(),
        })?;
        Ok(LoadedTemplate { name: kind.builtin_name().to_string(), text: text.to_string() })
    }

    pub fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String, AppError> {
        let template = self.load(kind)?;
        self.env.render_named_str(&template.name, &template.text, context).map_err(|err| {
            AppError::TemplateRender { name: template.name.clone(), details: err.to_string() }
        })
    }
}

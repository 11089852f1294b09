//! Template kinds and their render contexts.

use serde::Serialize;

use super::{ResolverPaths, ScaffoldRequest};

/// Artifact template rendered during scaffolding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    FunctionHandler,
    RequestMapping,
    SchemaFragment,
    TestFile,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::FunctionHandler,
        TemplateKind::RequestMapping,
        TemplateKind::SchemaFragment,
        TemplateKind::TestFile,
    ];

    /// Key under the plugin's `custom` section naming a project override.
    pub fn override_key(self) -> &'static str {
        match self {
            TemplateKind::FunctionHandler => "functionTemplate",
            TemplateKind::RequestMapping => "requestTemplate",
            TemplateKind::SchemaFragment => "schemaTemplate",
            TemplateKind::TestFile => "testTemplate",
        }
    }

    /// File name of the built-in template.
    pub fn builtin_name(self) -> &'static str {
        match self {
            TemplateKind::FunctionHandler => "function.js.j2",
            TemplateKind::RequestMapping => "request.vtl.j2",
            TemplateKind::SchemaFragment => "schema.graphql.j2",
            TemplateKind::TestFile => "test.js.j2",
        }
    }
}

/// Variables exposed to templates. Absent values are left out so they
/// render as empty strings.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateContext {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resolver_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handler_name: Option<String>,
}

impl TemplateContext {
    /// The handler stub takes no variables.
    pub fn handler() -> Self {
        Self::default()
    }

    pub fn request_mapping(request: &ScaffoldRequest) -> Self {
        Self { field: Some(request.resolver_name.clone()), ..Self::default() }
    }

    pub fn schema(request: &ScaffoldRequest) -> Self {
        Self {
            resolver_type: Some(request.resolver_type.display_name().to_string()),
            field: Some(request.resolver_name.clone()),
            unit_name: Some(request.unit_name_or_empty().to_string()),
            ..Self::default()
        }
    }

    pub fn test(request: &ScaffoldRequest, paths: &ResolverPaths) -> Self {
        Self {
            resolver_name: Some(request.resolver_name.clone()),
            function_path: Some(paths.relative_import_path.clone()),
            handler_name: Some(paths.handler_name.clone()),
            ..Self::default()
        }
    }
}

//! Resolver identities and manifest entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Default data source for newly created resolvers.
pub const DEFAULT_DATA_SOURCE: &str = "Lambda";

/// Shared response mapping template referenced by generated resolvers.
pub const COMMON_RESPONSE_TEMPLATE: &str = "common-response.vtl";

/// GraphQL resolver kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolverType {
    Query,
    Mutation,
    Function,
}

impl ResolverType {
    pub const ALL: [ResolverType; 3] =
        [ResolverType::Query, ResolverType::Mutation, ResolverType::Function];

    /// Lowercase name used on the command line.
    pub fn cli_name(self) -> &'static str {
        match self {
            ResolverType::Query => "query",
            ResolverType::Mutation => "mutation",
            ResolverType::Function => "function",
        }
    }

    /// Capitalized name used in the manifest and schema.
    pub fn display_name(self) -> &'static str {
        match self {
            ResolverType::Query => "Query",
            ResolverType::Mutation => "Mutation",
            ResolverType::Function => "Function",
        }
    }

    /// Whether a schema fragment is generated for this resolver type.
    pub fn has_schema(self) -> bool {
        !matches!(self, ResolverType::Function)
    }
}

impl fmt::Display for ResolverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ResolverType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResolverType::ALL
            .into_iter()
            .find(|kind| kind.cli_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::InvalidResolverType(s.to_string()))
    }
}

/// Entry in the `mappingTemplates` list of `resolvers.yml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverDefinition {
    #[serde(rename = "type")]
    pub resolver_type: ResolverType,
    pub field: String,
    pub data_source: String,
    pub request: String,
    pub response: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
}

impl ResolverDefinition {
    /// Build the manifest entry for a scaffold request.
    pub fn new(request: &ScaffoldRequest, data_source: Option<&str>) -> Self {
        Self {
            resolver_type: request.resolver_type,
            field: request.resolver_name.clone(),
            data_source: data_source.unwrap_or(DEFAULT_DATA_SOURCE).to_string(),
            request: request_template_file_name(request.resolver_type, &request.resolver_name),
            response: COMMON_RESPONSE_TEMPLATE.to_string(),
            unit_name: request.unit_name.clone(),
        }
    }
}

/// `<Type>-<field>-request.vtl`
pub fn request_template_file_name(resolver_type: ResolverType, field: &str) -> String {
    format!("{}-{}-request.vtl", resolver_type.display_name(), field)
}

/// Fully collected inputs for one resolver scaffold.
///
/// Also serves as the resolver identity handed from resolver creation to
/// test scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    pub resolver_type: ResolverType,
    /// Resolver type exactly as supplied; used as the handler directory.
    pub type_label: String,
    pub resolver_name: String,
    pub unit_name: Option<String>,
}

impl ScaffoldRequest {
    /// Unit name for schema rendering; empty when none was collected.
    pub fn unit_name_or_empty(&self) -> &str {
        self.unit_name.as_deref().unwrap_or("")
    }
}

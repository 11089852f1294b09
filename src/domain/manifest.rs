//! Resolver manifest (`resolvers.yml`) model.
//!
//! Existing entries are kept as raw YAML values so that fields this tool
//! does not know about survive a rewrite. Only `field` is interpreted.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::{Mapping, Value};

use super::{AppError, ResolverDefinition};

/// Manifest file name, relative to the service root.
pub const RESOLVER_MANIFEST_FILE: &str = "resolvers.yml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverManifest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mapping_templates: Vec<Value>,
    /// Every other top-level key, carried through unchanged.
    #[serde(flatten)]
    pub other: Mapping,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ResolverManifest {
    /// Parse manifest text. An empty document is an empty manifest.
    pub fn parse(content: &str, what: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
            .map_err(|err| AppError::ParseError { what: what.to_string(), details: err.to_string() })
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        serde_yaml::to_string(self).map_err(|err| AppError::ParseError {
            what: RESOLVER_MANIFEST_FILE.to_string(),
            details: err.to_string(),
        })
    }

    /// Registered field names in manifest order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.mapping_templates
            .iter()
            .filter_map(|entry| entry.get("field").and_then(Value::as_str))
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields().any(|existing| existing == field)
    }

    /// Append a resolver, rejecting a duplicate `field`.
    ///
    /// On error the manifest is left untouched.
    pub fn append(&mut self, resolver: &ResolverDefinition) -> Result<(), AppError> {
        if self.contains_field(&resolver.field) {
            return Err(AppError::DuplicateResolver(resolver.field.clone()));
        }

        let entry = serde_yaml::to_value(resolver).map_err(|err| AppError::ParseError {
            what: format!("resolver '{}'", resolver.field),
            details: err.to_string(),
        })?;
        self.mapping_templates.push(entry);
        Ok(())
    }
}

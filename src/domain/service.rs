//! Typed view of the host service configuration (`serverless.yml`).
//!
//! Only the keys this tool reads are modelled; everything else is ignored.
//! Variable references such as `${self:...}` are passed through verbatim.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::AppError;

pub const SERVICE_CONFIG_FILE: &str = "serverless.yml";

/// `custom` key holding template overrides.
pub const PLUGIN_CONFIG_KEY: &str = "serverless-jest-plugin";

/// `custom` key holding test runner configuration.
pub const TEST_CONFIG_KEY: &str = "jest";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub service: Option<Value>,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub functions: BTreeMap<String, FunctionConfig>,
    #[serde(default)]
    pub custom: Mapping,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub environment: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionConfig {
    #[serde(default)]
    pub handler: Option<String>,
    #[serde(default)]
    pub environment: BTreeMap<String, Value>,
}

impl ServiceConfig {
    pub fn parse(content: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|err| AppError::ParseError {
            what: SERVICE_CONFIG_FILE.to_string(),
            details: err.to_string(),
        })
    }

    /// Service name, whether written as `service: name` or `service: { name: ... }`.
    pub fn service_name(&self) -> Option<&str> {
        match self.service.as_ref()? {
            Value::String(name) => Some(name),
            Value::Mapping(map) => map.get("name").and_then(Value::as_str),
            _ => None,
        }
    }

    /// String setting under `custom.serverless-jest-plugin`.
    pub fn plugin_setting(&self, key: &str) -> Option<&str> {
        self.custom.get(PLUGIN_CONFIG_KEY)?.get(key)?.as_str()
    }

    /// Test runner configuration under `custom.jest`; empty when absent.
    pub fn test_config(&self) -> Mapping {
        match self.custom.get(TEST_CONFIG_KEY) {
            Some(Value::Mapping(map)) => map.clone(),
            _ => Mapping::new(),
        }
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Provider-level environment overlaid with the function's own.
    pub fn function_environment(&self, name: &str) -> BTreeMap<String, String> {
        let mut env: BTreeMap<String, String> = self
            .provider
            .environment
            .iter()
            .map(|(key, value)| (key.clone(), env_value_string(value)))
            .collect();

        if let Some(function) = self.functions.get(name) {
            for (key, value) in &function.environment {
                env.insert(key.clone(), env_value_string(value));
            }
        }
        env
    }
}

fn env_value_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other).map(|s| s.trim_end().to_string()).unwrap_or_default(),
    }
}

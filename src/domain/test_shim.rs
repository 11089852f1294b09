//! Test runner configuration assembled for each `invoke test`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value as JsonValue, json};
use serde_yaml::Mapping;

use super::AppError;

pub const DEFAULT_TEST_ENVIRONMENT: &str = "node";

/// Pattern matching generated test files.
pub const TEST_FILE_PATTERN: &str = r"\.test\.js$";

/// Child-process variable naming the service root for handler lookup.
pub const TEST_ROOT_VAR: &str = "SERVERLESS_TEST_ROOT";

/// Child-process variable marking test mode.
pub const TEST_MODE_VAR: &str = "NODE_ENV";
pub const TEST_MODE_VALUE: &str = "test";

/// Options accepted by `invoke test`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestRunOptions {
    pub function: Option<String>,
    pub reporter: Option<String>,
    pub reporter_options: Option<String>,
    pub path: Option<String>,
}

/// Configuration handed to the test runner.
#[derive(Debug, Clone, PartialEq)]
pub struct TestShimConfig {
    pub test_environment: String,
    pub test_regex: String,
    pub reporter: Option<String>,
    pub reporter_options: Option<String>,
    pub root_dir: PathBuf,
    /// Directory the runner searches for tests.
    pub search_path: PathBuf,
    /// Remaining plugin configuration, passed through untouched.
    pub extra: Map<String, JsonValue>,
}

impl TestShimConfig {
    /// Merge defaults with the plugin's test configuration and CLI options.
    ///
    /// Plugin settings override defaults, except `testRegex`, which is
    /// always fixed to the generated test-file suffix.
    pub fn build(
        plugin_config: &Mapping,
        options: &TestRunOptions,
        service_root: &Path,
    ) -> Result<Self, AppError> {
        let mut extra = match serde_json::to_value(plugin_config) {
            Ok(JsonValue::Object(map)) => map,
            Ok(_) => Map::new(),
            Err(err) => {
                return Err(AppError::config_error(format!(
                    "Test runner configuration must be a mapping with string keys: {err}"
                )));
            }
        };

        let test_environment = match extra.remove("testEnvironment") {
            Some(JsonValue::String(env)) => env,
            _ => DEFAULT_TEST_ENVIRONMENT.to_string(),
        };
        let root_dir = match extra.remove("rootDir") {
            Some(JsonValue::String(dir)) => service_root.join(dir),
            _ => service_root.to_path_buf(),
        };
        extra.remove("testRegex");

        let test_regex = match options.function.as_deref() {
            Some(function) => format!("{}{}", escape_regex(function), TEST_FILE_PATTERN),
            None => TEST_FILE_PATTERN.to_string(),
        };

        let search_path = match options.path.as_deref() {
            Some(path) => service_root.join(path),
            None => service_root.to_path_buf(),
        };

        Ok(Self {
            test_environment,
            test_regex,
            reporter: options.reporter.clone(),
            reporter_options: options.reporter_options.clone(),
            root_dir,
            search_path,
            extra,
        })
    }

    /// JSON document passed to the runner via `--config`.
    pub fn to_runner_config(&self) -> JsonValue {
        let mut config = self.extra.clone();
        config.insert("testEnvironment".into(), json!(self.test_environment));
        config.insert("testRegex".into(), json!(self.test_regex));
        config.insert("rootDir".into(), json!(self.root_dir.to_string_lossy()));

        if let Some(reporter) = &self.reporter {
            let entry = match self.reporter_options.as_deref() {
                Some(options) => json!([reporter, parse_reporter_options(options)]),
                None => json!(reporter),
            };
            config.insert("reporters".into(), JsonValue::Array(vec![entry]));
        }

        JsonValue::Object(config)
    }
}

/// Reporter options are either a JSON object or `key=value,key=value`.
fn parse_reporter_options(raw: &str) -> JsonValue {
    if let Ok(value @ JsonValue::Object(_)) = serde_json::from_str::<JsonValue>(raw) {
        return value;
    }

    let map: Map<String, JsonValue> = raw
        .split(',')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.trim().to_string(), JsonValue::String(value.trim().to_string())))
        })
        .collect();
    JsonValue::Object(map)
}

fn escape_regex(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if "\\.+*?()|[]{}^$".contains(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

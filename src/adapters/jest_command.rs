//! Test engine adapter spawning the jest CLI.

use std::process::Command;

use tracing::{debug, info};

use crate::domain::test_shim::{TEST_MODE_VALUE, TEST_MODE_VAR, TEST_ROOT_VAR};
use crate::domain::{AppError, HandlerLocator, TestShimConfig};
use crate::ports::{TestEngine, TestRunSummary};

/// Variable replacing the runner program (default `npx jest`).
pub const TEST_RUNNER_VAR: &str = "SLS_RESOLVER_TEST_RUNNER";

#[derive(Debug, Clone)]
pub struct JestCommandAdapter {
    program: String,
    leading_args: Vec<String>,
}

impl Default for JestCommandAdapter {
    fn default() -> Self {
        Self { program: "npx".to_string(), leading_args: vec!["jest".to_string()] }
    }
}

impl JestCommandAdapter {
    pub fn new(program: impl Into<String>, leading_args: Vec<String>) -> Self {
        Self { program: program.into(), leading_args }
    }

    /// Honor `SLS_RESOLVER_TEST_RUNNER` when set, otherwise `npx jest`.
    pub fn from_env() -> Self {
        match std::env::var(TEST_RUNNER_VAR) {
            Ok(runner) if !runner.trim().is_empty() => {
                let mut parts = runner.split_whitespace().map(str::to_string);
                let program = parts.next().unwrap_or_default();
                Self::new(program, parts.collect())
            }
            _ => Self::default(),
        }
    }

    fn args(&self, config: &TestShimConfig) -> Vec<String> {
        let mut args = self.leading_args.clone();
        args.push("--config".to_string());
        args.push(config.to_runner_config().to_string());
        args.push(config.search_path.to_string_lossy().into_owned());
        args
    }
}

impl TestEngine for JestCommandAdapter {
    fn run(
        &self,
        config: &TestShimConfig,
        locator: &HandlerLocator,
    ) -> Result<TestRunSummary, AppError> {
        let args = self.args(config);
        let command_line = format!("{} {}", self.program, args.join(" "));
        debug!(command = %command_line, "spawning test runner");

        let status = Command::new(&self.program)
            .args(&args)
            .current_dir(&config.root_dir)
            .env(TEST_ROOT_VAR, locator.test_root())
            .env(TEST_MODE_VAR, TEST_MODE_VALUE)
            .status()
            .map_err(|e| {
                AppError::TestEngine(format!("could not start '{}': {}", self.program, e))
            })?;

        match status.code() {
            Some(0) => {
                info!("test runner finished successfully");
                Ok(TestRunSummary { command: command_line, exit_code: 0 })
            }
            Some(code) => Err(AppError::TestEngine(format!(
                "'{}' exited with status {}",
                self.program, code
            ))),
            None => Err(AppError::TestEngine(format!(
                "'{}' was terminated by a signal",
                self.program
            ))),
        }
    }
}

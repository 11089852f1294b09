use std::cell::RefCell;
use std::path::PathBuf;

use crate::domain::{AppError, HandlerLocator, TestShimConfig};
use crate::ports::{TestEngine, TestRunSummary};

/// Test engine double recording each invocation.
#[derive(Debug, Default)]
pub struct FakeTestEngine {
    failure: Option<String>,
    pub runs: RefCell<Vec<(TestShimConfig, PathBuf)>>,
}

impl FakeTestEngine {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self { failure: Some(message.to_string()), runs: RefCell::new(Vec::new()) }
    }
}

impl TestEngine for FakeTestEngine {
    fn run(
        &self,
        config: &TestShimConfig,
        locator: &HandlerLocator,
    ) -> Result<TestRunSummary, AppError> {
        self.runs.borrow_mut().push((config.clone(), locator.test_root().to_path_buf()));
        match &self.failure {
            Some(message) => Err(AppError::TestEngine(message.clone())),
            None => Ok(TestRunSummary { command: "fake-jest".to_string(), exit_code: 0 }),
        }
    }
}

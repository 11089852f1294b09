use crate::domain::{AppError, HandlerLocator, TestShimConfig};

/// Result reported by a successful test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestRunSummary {
    /// Command line that was executed, for display.
    pub command: String,
    pub exit_code: i32,
}

/// Port for the external test-execution engine.
///
/// Failures (failing tests, crashes, missing binary) are reported as
/// `AppError::TestEngine` and are not interpreted further.
pub trait TestEngine {
    fn run(
        &self,
        config: &TestShimConfig,
        locator: &HandlerLocator,
    ) -> Result<TestRunSummary, AppError>;
}

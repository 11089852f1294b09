//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution against a service directory on disk.

use std::path::PathBuf;

use crate::adapters::{JestCommandAdapter, ProcessEnvironment, ServiceDirectory, TerminalPrompter};
use crate::app::{
    AppContext,
    commands::{create, invoke},
};
use crate::domain::ScaffoldRequestBuilder;

pub use crate::app::commands::create::{CreateResolverOptions, CreateResolverOutcome};
pub use crate::domain::{AppError, ResolverType, TestRunOptions};
pub use crate::ports::TestRunSummary;

/// Inputs for scaffolding a resolver; anything left `None` is prompted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateFunctionInput {
    pub name: Option<String>,
    pub resolver_type: Option<String>,
    pub data_source: Option<String>,
    pub unit_name: Option<String>,
    /// Test directory override; may contain `{function}`.
    pub test_path: Option<String>,
}

/// Resolver and test files written by a create command.
///
/// `created` lists the resolver artifacts; the test file is reported apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    pub resolver_type: ResolverType,
    pub field: String,
    pub created: Vec<PathBuf>,
    pub test_file: PathBuf,
}

fn service_directory(service_path: Option<PathBuf>) -> Result<ServiceDirectory, AppError> {
    match service_path {
        Some(path) => Ok(ServiceDirectory::new(path)),
        None => ServiceDirectory::current(),
    }
}

fn create_context(
    service_path: Option<PathBuf>,
) -> Result<AppContext<ServiceDirectory, TerminalPrompter>, AppError> {
    Ok(AppContext::new(service_directory(service_path)?, TerminalPrompter::new()))
}

// =============================================================================
// Create Command API
// =============================================================================

/// Scaffold a resolver and its test in the current directory.
pub fn create_function(input: CreateFunctionInput) -> Result<ScaffoldOutcome, AppError> {
    create_function_at(input, None)
}

/// Scaffold a resolver and its test in the given service directory.
pub fn create_function_at(
    input: CreateFunctionInput,
    service_path: Option<PathBuf>,
) -> Result<ScaffoldOutcome, AppError> {
    scaffold(input, service_path, false)
}

/// Interactive variant that also asks for the unit name.
pub fn create_appsync_at(
    input: CreateFunctionInput,
    service_path: Option<PathBuf>,
) -> Result<ScaffoldOutcome, AppError> {
    scaffold(input, service_path, true)
}

fn scaffold(
    input: CreateFunctionInput,
    service_path: Option<PathBuf>,
    ask_unit_name: bool,
) -> Result<ScaffoldOutcome, AppError> {
    let ctx = create_context(service_path)?;
    let builder = ScaffoldRequestBuilder::new()
        .resolver_type(input.resolver_type)
        .resolver_name(input.name)
        .unit_name(input.unit_name)
        .ask_unit_name(ask_unit_name);
    let options =
        CreateResolverOptions { data_source: input.data_source, test_path: input.test_path };

    let outcome = create::create_resolver(&ctx, builder, &options)?;
    let created = outcome.written.into_iter().filter(|path| *path != outcome.test_file).collect();

    Ok(ScaffoldOutcome {
        resolver_type: outcome.request.resolver_type,
        field: outcome.request.resolver_name,
        created,
        test_file: outcome.test_file,
    })
}

// =============================================================================
// Invoke Command API
// =============================================================================

/// Run the service's tests from the current directory.
pub fn invoke_test(options: TestRunOptions) -> Result<TestRunSummary, AppError> {
    invoke_test_at(options, None)
}

/// Run the service's tests for the given service directory.
pub fn invoke_test_at(
    options: TestRunOptions,
    service_path: Option<PathBuf>,
) -> Result<TestRunSummary, AppError> {
    let fs = service_directory(service_path)?;
    let engine = JestCommandAdapter::from_env();
    invoke::run_tests(&fs, &ProcessEnvironment, &engine, &options)
}

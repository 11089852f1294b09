//! sls-resolver: scaffold GraphQL resolvers for serverless services and run
//! their jest tests.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CreateFunctionInput, ScaffoldOutcome, create_appsync_at, create_function, create_function_at,
    invoke_test, invoke_test_at,
};
pub use domain::{AppError, ResolverType, TestRunOptions};

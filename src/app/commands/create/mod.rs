//! Create command: scaffold a resolver and its companion test.

mod resolver;

use std::path::PathBuf;

use crate::domain::{ResolverDefinition, ScaffoldRequest};

pub use resolver::{CreateResolverOptions, create_resolver};
pub use test::create_test;

/// Outcome of `create_resolver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateResolverOutcome {
    /// Resolver identity, handed on to test scaffolding.
    pub request: ScaffoldRequest,
    pub definition: ResolverDefinition,
    /// Artifact files written, relative to the service root.
    pub written: Vec<PathBuf>,
    /// Companion test file; also listed in `written`.
    pub test_file: PathBuf,
}

pub mod error;
pub mod manifest;
pub mod paths;
pub mod resolver;
pub mod scaffold_request;
pub mod service;
pub mod templates;
pub mod test_shim;

pub use error::AppError;
pub use manifest::{RESOLVER_MANIFEST_FILE, ResolverManifest};
pub use paths::{HandlerLocator, ResolverPaths, derive_paths};
pub use resolver::{ResolverDefinition, ResolverType, ScaffoldRequest, request_template_file_name};
pub use scaffold_request::ScaffoldRequestBuilder;
pub use service::{SERVICE_CONFIG_FILE, ServiceConfig};
pub use templates::{TemplateContext, TemplateKind};
pub use test_shim::{TestRunOptions, TestShimConfig};

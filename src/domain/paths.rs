//! Path catalog for generated resolver artifacts.
//!
//! All paths are relative to the service root unless the caller supplied an
//! absolute test directory.

use std::path::{Component, Path, PathBuf};

use super::{AppError, ResolverType, request_template_file_name};

/// Test directory used when no `--path` is given.
pub const DEFAULT_TEST_DIR: &str = "__tests__";

/// Token in a test path override replaced by the handler's directory.
pub const FUNCTION_PLACEHOLDER: &str = "{function}";

/// Extension of generated handler modules.
pub const HANDLER_EXTENSION: &str = "js";

/// Suffix of generated test files.
pub const TEST_FILE_SUFFIX: &str = "test.js";

pub const MAPPING_TEMPLATES_DIR: &str = "mapping-templates";
pub const SCHEMA_DIR: &str = "schema";

/// Paths derived for one resolver's handler and companion test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverPaths {
    pub handler_dir: PathBuf,
    pub handler_file: PathBuf,
    pub test_dir: PathBuf,
    pub test_file: PathBuf,
    /// Import path from `test_dir` to the handler module, without extension.
    pub relative_import_path: String,
    /// Export name handed to the handler wrapper in generated tests.
    pub handler_name: String,
}

/// Derive handler and test paths for a resolver.
///
/// `type_label` is used verbatim as the handler directory. Relative test
/// directories are anchored at `service_root` before the import path is
/// computed, so absolute and relative overrides resolve the same way.
pub fn derive_paths(
    service_root: &Path,
    type_label: &str,
    resolver_name: &str,
    test_root_override: Option<&str>,
) -> ResolverPaths {
    let handler_dir = PathBuf::from(type_label);
    let handler_file = handler_dir.join(format!("{resolver_name}.{HANDLER_EXTENSION}"));

    let test_dir = PathBuf::from(
        test_root_override
            .unwrap_or(DEFAULT_TEST_DIR)
            .replace(FUNCTION_PLACEHOLDER, &handler_dir.to_string_lossy()),
    );
    let test_file = test_dir.join(format!("{type_label}-{resolver_name}.{TEST_FILE_SUFFIX}"));

    let from = normalize_path(&service_root.join(&test_dir));
    let to = normalize_path(&service_root.join(&handler_dir));
    let relative = relative_path(&from, &to).join(resolver_name);

    ResolverPaths {
        handler_dir,
        handler_file,
        test_dir,
        test_file,
        relative_import_path: to_import_specifier(&relative),
        handler_name: HANDLER_EXTENSION.to_string(),
    }
}

/// `mapping-templates/<Type>-<field>-request.vtl`
pub fn request_template_path(resolver_type: ResolverType, field: &str) -> PathBuf {
    Path::new(MAPPING_TEMPLATES_DIR).join(request_template_file_name(resolver_type, field))
}

/// `schema/<type>-<field>.graphql`
pub fn schema_path(type_label: &str, field: &str) -> PathBuf {
    Path::new(SCHEMA_DIR).join(format!("{type_label}-{field}.graphql"))
}

/// Reject relative paths that leave `service_root` once `..` is resolved.
/// Absolute paths are accepted as given.
pub fn ensure_within_root(service_root: &Path, path: &Path) -> Result<(), AppError> {
    if path.is_absolute() {
        return Ok(());
    }
    if normalize_path(&service_root.join(path)).starts_with(normalize_path(service_root)) {
        Ok(())
    } else {
        Err(AppError::PathTraversal(path.display().to_string()))
    }
}

/// Compute the path that leads from directory `from` to `to`.
///
/// Both inputs must be normalized and share the same anchor (both absolute
/// or both relative to the same base).
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component<'_>> = from.components().collect();
    let to: Vec<Component<'_>> = to.components().collect();

    let common = from.iter().zip(to.iter()).take_while(|(a, b)| a == b).count();

    let mut result = PathBuf::new();
    for _ in common..from.len() {
        result.push("..");
    }
    for component in &to[common..] {
        result.push(component.as_os_str());
    }
    result
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

/// Render a relative path as a module specifier with `/` separators.
fn to_import_specifier(path: &Path) -> String {
    let joined = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/");
    if joined.starts_with("..") { joined } else { format!("./{joined}") }
}

/// Resolves handler references (`dir/module.export`) against an explicit
/// test root instead of ambient process state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerLocator {
    test_root: PathBuf,
}

/// Module file and export name for a function handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerLocation {
    pub module_file: PathBuf,
    pub export: String,
}

impl HandlerLocator {
    pub fn new(test_root: impl Into<PathBuf>) -> Self {
        Self { test_root: test_root.into() }
    }

    pub fn test_root(&self) -> &Path {
        &self.test_root
    }

    /// Locate the module behind a `handler:` reference such as
    /// `query/listPosts.handler`.
    pub fn locate(&self, handler: &str) -> HandlerLocation {
        let (module, export) = match handler.rsplit_once('.') {
            Some((module, export)) if !module.is_empty() => (module, export),
            _ => (handler, "handler"),
        };
        HandlerLocation {
            module_file: self
                .test_root
                .join(format!("{}.{HANDLER_EXTENSION}", module.trim_start_matches('/'))),
            export: export.to_string(),
        }
    }
}

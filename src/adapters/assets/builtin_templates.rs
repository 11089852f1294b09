use include_dir::{Dir, include_dir};

use crate::domain::TemplateKind;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Built-in template text for an artifact kind.
pub fn builtin_template(kind: TemplateKind) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(kind.builtin_name()).and_then(|file| file.contents_utf8())
}

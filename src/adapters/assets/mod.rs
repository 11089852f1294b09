mod builtin_templates;

pub use builtin_templates::builtin_template;

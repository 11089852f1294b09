pub mod artifact_generator;
pub mod manifest_updater;
pub mod service_config;
pub mod template_renderer;

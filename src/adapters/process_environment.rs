use crate::ports::EnvironmentWriter;

/// Writes into the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentWriter for ProcessEnvironment {
    fn set_var(&self, key: &str, value: &str) {
        // SAFETY: the CLI exports the environment from its only thread,
        // before the test runner is spawned.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

/// Port for exporting variables into the current process environment.
///
/// Writes are process-wide and are never rolled back.
pub trait EnvironmentWriter {
    fn set_var(&self, key: &str, value: &str);
}

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::ports::EnvironmentWriter;

/// Captures exported variables instead of touching the process.
#[derive(Debug, Default)]
pub struct RecordingEnvironment {
    vars: RefCell<BTreeMap<String, String>>,
}

impl RecordingEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.vars.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.vars.borrow().len()
    }
}

impl EnvironmentWriter for RecordingEnvironment {
    fn set_var(&self, key: &str, value: &str) {
        self.vars.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

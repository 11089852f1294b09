use crate::ports::{Prompter, ServiceFilesystem};

/// Application context holding dependencies for scaffolding commands.
pub struct AppContext<F: ServiceFilesystem, P: Prompter> {
    fs: F,
    prompter: P,
}

impl<F: ServiceFilesystem, P: Prompter> AppContext<F, P> {
    /// Create a new application context.
    pub fn new(fs: F, prompter: P) -> Self {
        Self { fs, prompter }
    }

    /// Get a reference to the service filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Get a reference to the interactive prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}

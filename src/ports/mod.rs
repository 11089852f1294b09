mod environment;
mod prompter;
mod service_filesystem;
mod test_engine;

pub use environment::EnvironmentWriter;
pub use prompter::Prompter;
pub use service_filesystem::ServiceFilesystem;
pub use test_engine::{TestEngine, TestRunSummary};

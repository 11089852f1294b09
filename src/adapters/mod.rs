pub mod assets;
pub mod filesystem;
pub mod jest_command;
pub mod process_environment;
pub mod terminal_prompter;

pub use filesystem::ServiceDirectory;
pub use jest_command::JestCommandAdapter;
pub use process_environment::ProcessEnvironment;
pub use terminal_prompter::TerminalPrompter;

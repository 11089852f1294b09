use std::path::PathBuf;

use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, TestRunOptions};

#[derive(Subcommand)]
pub enum InvokeCommands {
    /// Run the service's jest tests
    Test {
        /// Only run tests generated for this function
        #[arg(short, long)]
        function: Option<String>,
        /// Jest reporter module
        #[arg(short, long)]
        reporter: Option<String>,
        /// Reporter options as JSON or key=value,key=value
        #[arg(long, requires = "reporter")]
        reporter_options: Option<String>,
        /// Directory to search for tests, relative to the service root
        #[arg(short, long)]
        path: Option<String>,
    },
}

pub fn run_invoke(command: InvokeCommands, service_path: Option<PathBuf>) -> Result<(), AppError> {
    match command {
        InvokeCommands::Test { function, reporter, reporter_options, path } => {
            let options = TestRunOptions { function, reporter, reporter_options, path };
            let summary = api::invoke_test_at(options, service_path)?;
            tracing::debug!(command = %summary.command, "test runner finished");
            println!("✅ Tests passed");
            Ok(())
        }
    }
}

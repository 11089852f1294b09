//! CLI Adapter.

mod create;
mod invoke;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "sls-resolver")]
#[command(version)]
#[command(
    about = "Scaffold GraphQL resolvers and run their tests for serverless services",
    long_about = None
)]
struct Cli {
    /// Service directory containing serverless.yml and resolvers.yml
    #[arg(long, global = true)]
    service_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold resolvers and their tests
    #[clap(visible_alias = "c")]
    Create {
        #[command(subcommand)]
        command: create::CreateCommands,
    },
    /// Run project tasks
    Invoke {
        #[command(subcommand)]
        command: invoke::InvokeCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Create { command } => create::run_create(command, cli.service_path),
        Commands::Invoke { command } => invoke::run_invoke(command, cli.service_path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

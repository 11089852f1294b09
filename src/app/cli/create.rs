use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::app::api::{self, CreateFunctionInput, ScaffoldOutcome};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum CreateCommands {
    /// Create a resolver handler, mapping template, schema and test
    #[clap(visible_alias = "fn")]
    Function {
        #[command(flatten)]
        args: ResolverArgs,
        /// Data source recorded in resolvers.yml (default: Lambda)
        #[arg(short, long)]
        datasource: Option<String>,
    },
    /// Create a resolver, prompting for every missing value
    Appsync {
        #[command(flatten)]
        args: ResolverArgs,
    },
}

#[derive(Args)]
pub struct ResolverArgs {
    /// Resolver field name
    #[arg(short, long)]
    name: Option<String>,
    /// Resolver type: query, mutation or function
    #[arg(short = 't', long = "type")]
    resolver_type: Option<String>,
    /// Singular GraphQL type returned by the resolver
    #[arg(short, long)]
    unit_name: Option<String>,
    /// Test directory; `{function}` expands to the handler directory
    #[arg(short, long)]
    path: Option<String>,
}

impl ResolverArgs {
    fn into_input(self, data_source: Option<String>) -> CreateFunctionInput {
        CreateFunctionInput {
            name: self.name,
            resolver_type: self.resolver_type,
            data_source,
            unit_name: self.unit_name,
            test_path: self.path,
        }
    }
}

pub fn run_create(command: CreateCommands, service_path: Option<PathBuf>) -> Result<(), AppError> {
    let outcome = match command {
        CreateCommands::Function { args, datasource } => {
            api::create_function_at(args.into_input(datasource), service_path)?
        }
        CreateCommands::Appsync { args } => {
            api::create_appsync_at(args.into_input(None), service_path)?
        }
    };

    report(&outcome);
    Ok(())
}

fn report(outcome: &ScaffoldOutcome) {
    println!("✅ Registered {} resolver \"{}\"", outcome.resolver_type, outcome.field);
    for path in &outcome.created {
        println!("✅ Created {}", path.display());
    }
    println!("✅ Created test file {}", outcome.test_file.display());
}

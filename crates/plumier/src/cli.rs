use std::error::Error;

use clap::{Parser, Subcommand};
use shared::error::CommonError;

use crate::commands::{self, completions::CompletionShell, serve::ServeParams};

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the Plumier gateway server
    Serve(ServeParams),
    /// Print the OpenAPI spec for the gateway API
    Openapi,
    /// Generate shell completions for plumier
    Completions {
        /// Shell to generate completions for
        shell: CompletionShell,
    },
    /// Show Plumier version
    Version,
}

fn log_error_chain(err: &(dyn Error)) {
    let mut current: Option<&(dyn Error)> = Some(err);

    while let Some(e) = current {
        eprintln!("Caused by: {e}");
        current = e.source();
    }
}

fn handle_error(err: &CommonError) {
    eprintln!("Error: {err}");
    log_error_chain(&err);
    ::std::process::exit(1);
}

pub async fn run_cli(cli: Cli) -> Result<(), anyhow::Error> {
    let cmd_res = match cli.command {
        Commands::Serve(params) => commands::serve::cmd_serve(params).await,
        Commands::Openapi => commands::openapi::cmd_openapi(),
        Commands::Completions { shell } => commands::completions::cmd_completions(shell),
        Commands::Version => {
            println!("Plumier CLI version: {CLI_VERSION}");
            Ok(())
        }
    };

    if let Err(e) = cmd_res {
        handle_error(&e);
    }
    Ok(())
}

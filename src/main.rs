use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use chirp::cli::handlers::{CommandContext, handle_mutate, handle_query, handle_serve};
use chirp::cli::{Cli, Commands};
use chirp::config::ChirpConfig;
use chirp::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.map(PathBuf::from));

    let config_path = cli.config.as_deref().map(std::path::Path::new);
    let mut config = ChirpConfig::load(config_path).context("Failed to load configuration")?;

    match cli.command {
        Commands::Serve { port, empty } => {
            if empty {
                config.store.seed = false;
            }
            let ctx = CommandContext::new(config);
            handle_serve(ctx, port)
        }
        Commands::Query { query, variables } => {
            let ctx = CommandContext::new(config);
            handle_query(ctx, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => {
            let ctx = CommandContext::new(config);
            handle_mutate(ctx, mutation, variables)
        }
    }
}

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod progress;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run_app(cli: Cli) -> Result<()> {
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("psnpath v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let file_config = config::PartialConfig::load(cli.config.as_deref())?;

    let result = match cli.command {
        Commands::Network(args) => commands::network::run(args, &file_config),
        Commands::Paths(args) => commands::paths::run(args, &file_config),
        Commands::Metapath(args) => commands::metapath::run(args, &file_config),
        Commands::Centrality(args) => commands::centrality::run(args, &file_config),
    };

    match &result {
        Ok(()) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {e}"),
    }
    result
}

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::{Cli, Commands};
use crate::config::builder::build_config;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("🚀 bondgraph CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = build_config(cli.config.as_deref(), &cli.set_values)?;

    let command_result = match cli.command {
        Commands::Info(args) => {
            info!("Dispatching to 'info' command.");
            commands::info::run(args)
        }
        Commands::Select(args) => {
            info!("Dispatching to 'select' command.");
            commands::select::run(args, &config)
        }
        Commands::Combine(args) => {
            info!("Dispatching to 'combine' command.");
            commands::combine::run(args, &config)
        }
        Commands::Connected(args) => {
            info!("Dispatching to 'connected' command.");
            commands::connected::run(args)
        }
        Commands::Components(args) => {
            info!("Dispatching to 'components' command.");
            commands::components::run(args, &config)
        }
        Commands::Connect(args) => {
            info!("Dispatching to 'connect' command.");
            commands::connect::run(args, &config)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }
    command_result
}

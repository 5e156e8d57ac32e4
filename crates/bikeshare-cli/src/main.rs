//! Bikeshare CLI - dashboard metrics for daily bike-rental data.

mod cli;
mod commands;
mod logging;
mod server;

use bikeshare::DashboardConfig;
use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.log_format);

    let result = match DashboardConfig::load(cli.config.as_deref()) {
        Ok(config) => match cli.command {
            Commands::Summary {
                file,
                start,
                end,
                trend,
                json,
            } => commands::summary::run(file, start, end, trend, json, config),

            Commands::Breakdown { file, json } => commands::breakdown::run(file, json, config),

            Commands::Inspect { file, json } => commands::inspect::run(file, json, config),

            Commands::Serve { file, port, host } => commands::serve::run(file, host, port, config),
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Serve command - dashboard data over HTTP.

use std::path::PathBuf;

use bikeshare::DashboardConfig;
use colored::Colorize;

use super::load_dataset;
use crate::server::{app, state::AppState};

pub fn run(
    file: PathBuf,
    host: String,
    port: u16,
    config: DashboardConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (dashboard, dataset, source) = load_dataset(&file, config)?;
    // Fail before binding when there is nothing to serve.
    dataset.bounds()?;

    let state = AppState::new(dashboard, dataset, source);

    let url = format!("http://{}:{}", host, port);
    println!();
    println!(
        "{} {}",
        "Serving dashboard data at".cyan().bold(),
        url.white().bold()
    );
    println!();
    println!("  File: {}", file.display());
    println!("  Try:  {}/api/dashboard", url);
    println!();
    println!("Press {} to stop the server", "Ctrl+C".yellow().bold());

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(app::run_server(state, &host, port))
}

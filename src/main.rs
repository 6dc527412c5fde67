// Calendar Grid
// Main entry point

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting calendar-grid");

    cli::run(cli::Cli::parse())
}

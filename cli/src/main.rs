mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{list, render, serve};

/// Map -v counts to a log level; warnings are always shown.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Regions => list::regions(&cli),
        Commands::Subregions(args) => list::subregions(&cli, args),
        Commands::Render(args) => render::run(&cli, args),
        Commands::Serve(args) => serve::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }

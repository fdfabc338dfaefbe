//! Trackport CLI - defect-tracker report renderer

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use trackport_cli::{commands, init_tracing, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("  {}: {:#}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => commands::init::run(path.as_deref()),
        Commands::Render(ref args) => commands::render::run(args),
        Commands::Formats => commands::formats::run(),
    }
}

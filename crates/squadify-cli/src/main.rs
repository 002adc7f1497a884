//! Squadify CLI - Check kanban teams against a board's squadification constraints.

use clap::Parser;
use squadify_cli::commands;
use squadify_cli::{Cli, Command, Config, Formatter};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    // Initialize tracing (log to stderr, stdout carries the output)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> squadify_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config
    let mut config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load()?,
    };

    // Override constraints list if specified
    if let Some(name) = cli.constraints_list {
        config.set_constraints_list(name)?;
    }

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Check(args) => commands::execute_check(args, &config, &formatter)?,
        Command::Team(args) => commands::execute_team(args, &config, &formatter)?,
        Command::Constraints(args) => commands::execute_constraints(args, &config, &formatter)?,
        Command::Charts(args) => commands::execute_charts(args, &config, &formatter)?,
    }

    Ok(())
}

//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Squadify - Check kanban teams against the board's squadification constraints.
#[derive(Debug, Parser)]
#[command(name = "squadify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SQUADIFY_CONFIG")]
    pub config: Option<String>,

    /// Name of the constraints list
    #[arg(long, global = true)]
    pub constraints_list: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (names and severities only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check every team on a board
    Check(CheckArgs),

    /// Show one team's detailed report
    Team(TeamArgs),

    /// Show the parsed constraints
    Constraints(ConstraintsArgs),

    /// Generate chart data
    Charts(ChartsArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Board snapshot JSON file (`-` for stdin)
    pub board: String,
}

/// Arguments for the team command.
#[derive(Debug, Parser)]
pub struct TeamArgs {
    /// Board snapshot JSON file (`-` for stdin)
    pub board: String,

    /// Team (list) name
    pub name: String,
}

/// Arguments for the constraints command.
#[derive(Debug, Parser)]
pub struct ConstraintsArgs {
    /// Board snapshot JSON file (`-` for stdin)
    pub board: String,
}

/// Arguments for the charts command.
#[derive(Debug, Parser)]
pub struct ChartsArgs {
    /// Board snapshot JSON file (`-` for stdin)
    pub board: String,

    /// Only this team
    #[arg(short, long)]
    pub team: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

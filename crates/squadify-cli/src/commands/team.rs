//! Team command implementation.

use super::load_session;
use crate::cli::TeamArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the team command.
pub fn execute_team(args: TeamArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_team(&args, config, formatter)?);
    Ok(())
}

fn render_team(args: &TeamArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let (board, session, _) = load_session(&args.board, config)?;
    board.require_list(&args.name)?;

    let report = session
        .report(&args.name)
        .ok_or_else(|| CliError::InvalidInput(format!("List '{}' is not a team", args.name)))?;
    formatter.format_report(report)
}

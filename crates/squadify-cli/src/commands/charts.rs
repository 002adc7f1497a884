//! Charts command implementation.

use super::load_session;
use crate::cli::ChartsArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Execute the charts command.
pub fn execute_charts(args: ChartsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_charts(&args, config, formatter)?);
    Ok(())
}

fn render_charts(args: &ChartsArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let (board, _, reports) = load_session(&args.board, config)?;

    match &args.team {
        Some(name) => {
            board.require_list(name)?;
            let selected: Vec<_> = reports.into_iter().filter(|r| &r.team == name).collect();
            if selected.is_empty() {
                return Err(CliError::InvalidInput(format!("List '{}' is not a team", name)));
            }
            formatter.format_charts(&selected)
        }
        None => formatter.format_charts(&reports),
    }
}

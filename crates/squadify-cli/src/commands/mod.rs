//! Command implementations.

pub mod charts;
pub mod check;
pub mod constraints;
pub mod team;

pub use self::charts::execute_charts;
pub use self::check::execute_check;
pub use self::constraints::execute_constraints;
pub use self::team::execute_team;

use crate::config::Config;
use crate::error::Result;
use crate::snapshot::SnapshotFile;
use squadify_board::{AnalyticsSession, Board, TeamReport};

/// Read a board and evaluate every team on it.
pub(crate) fn load_session(
    board: &str,
    config: &Config,
) -> Result<(Board, AnalyticsSession, Vec<TeamReport>)> {
    let board = SnapshotFile::new(board).load()?;
    let mut session = AnalyticsSession::new(config.engine.clone());
    let reports = session.load_board(&board)?;
    Ok((board, session, reports))
}

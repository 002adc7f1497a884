//! Board snapshot files.

use crate::error::{CliError, Result};
use squadify_board::Board;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

/// Where a board snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotFile {
    /// A JSON file
    Path(PathBuf),
    /// Standard input
    Stdin,
}

impl SnapshotFile {
    /// Interpret a command-line argument: `-` is stdin, anything else a path.
    pub fn new(arg: &str) -> Self {
        if arg == "-" {
            SnapshotFile::Stdin
        } else {
            SnapshotFile::Path(PathBuf::from(arg))
        }
    }

    /// Read the raw snapshot text.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            SnapshotFile::Path(path) => {
                if !path.exists() {
                    return Err(CliError::InvalidInput(format!(
                        "Board snapshot '{}' does not exist",
                        path.display()
                    )));
                }
                Ok(fs::read_to_string(path)?)
            }
            SnapshotFile::Stdin => {
                let mut contents = String::new();
                std::io::stdin().read_to_string(&mut contents)?;
                Ok(contents)
            }
        }
    }

    /// Read and parse the board.
    pub fn load(&self) -> Result<Board> {
        let contents = self.read_to_string()?;
        let board = Board::from_json(&contents)?;
        debug!("Loaded {} lists from {:?}", board.lists.len(), self);
        Ok(board)
    }
}

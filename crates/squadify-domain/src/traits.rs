//! Trait definitions for the collaborator boundary
//!
//! The engine never reads a live board. A collaborator (a browser layer, a
//! snapshot file, a test fixture) materializes lists and colours and hands
//! them over through these traits.

use crate::{LabelColors, Team};

/// Source of board snapshots
///
/// Implemented by whatever layer can see the board; `squadify-board`
/// implements it for in-memory snapshots
pub trait BoardSource {
    /// Error type for snapshot reads
    type Error;

    /// All lists on the board, in board order
    fn lists(&self) -> Result<Vec<Team>, Self::Error>;

    /// Colour of every label used on the board
    fn label_colors(&self) -> Result<LabelColors, Self::Error>;
}

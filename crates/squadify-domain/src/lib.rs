//! Squadify Domain Layer
//!
//! This crate contains the data model shared by every Squadify crate: the
//! board snapshot shapes a collaborator hands to the engine, the typed counts
//! the engine derives from them, and the result types it hands back.
//!
//! ## Key Concepts
//!
//! - **Team**: a named, ordered list of cards evaluated against constraints
//! - **Card**: a title, labels (the first non-wildcard label is the role) and
//!   free-text `"Name: Value"` field badges
//! - **RoleCounts / FieldAggregate**: typed tallies extracted from a team
//! - **ConstraintSet**: role minimums plus optional size and confidence bounds
//! - **Violation / Concern / Severity**: what a team check reports
//!
//! ## Architecture
//!
//! - Pure data and pure functions, no I/O
//! - `serde` is the only dependency so snapshots can cross the collaborator
//!   boundary as JSON
//! - Trait definitions for the collaborator that supplies snapshots

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod card;
pub mod color;
pub mod confidence;
pub mod constraint;
pub mod counts;
pub mod label;
pub mod team;
pub mod traits;
pub mod violation;

// Re-exports for convenience
pub use card::{Card, Field};
pub use color::LabelColors;
pub use confidence::{average_confidence, is_low_confidence, CONFIDENCE_FIELD};
pub use constraint::ConstraintSet;
pub use counts::{FieldAggregate, FieldValues, RoleCounts};
pub use label::{Label, LabelFilter, CONCERN_LABEL, WILDCARD_MARKER};
pub use team::{Team, DEFAULT_CONSTRAINTS_LIST_NAME};
pub use violation::{Concern, Severity, Violation};

//! Squadify Board
//!
//! Board snapshots and the analytics session that keeps every team's report
//! current.
//!
//! # Overview
//!
//! A collaborator that can see the board (a browser extension, a snapshot
//! file, a test) builds a [`Board`] and tells an [`AnalyticsSession`] what
//! changed:
//!
//! - **Board loaded**: parse the constraints list, evaluate every team
//! - **Constraints changed**: reparse, re-evaluate every team
//! - **Team changed**: re-evaluate that team alone
//!
//! Each call returns the [`TeamReport`]s that need redrawing.
//!
//! # Architecture
//!
//! ```text
//! Board → AnalyticsSession → Gatekeeper (status) + Charts (chart records) → TeamReport
//! ```

#![warn(missing_docs)]

mod board;
mod error;
mod metrics;
mod report;
mod session;

pub use board::Board;
pub use error::BoardError;
pub use metrics::SessionMetrics;
pub use report::TeamReport;
pub use session::{AnalyticsSession, ChangeNotification};

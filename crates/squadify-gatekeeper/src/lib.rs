//! Squadify Gatekeeper
//!
//! Parses the constraints list and checks teams against it.
//!
//! The Gatekeeper provides:
//! - Constraint parsing (role minimums, size and confidence directives)
//! - Role and size evaluation with ordered violation messages
//! - Concern detection (flagged cards, low confidence)
//! - Status colours for the team's status area
//!
//! # Examples
//!
//! ```
//! use squadify_domain::{Card, Label, Severity, Team};
//! use squadify_gatekeeper::{parse_constraints, Gatekeeper};
//!
//! let rules = Team::new("Squadification Constraints")
//!     .with_card(Card::new("A developer").with_label(Label::new("Dev").unwrap()))
//!     .with_card(Card::new("size > 1"));
//! let constraints = parse_constraints(&rules);
//!
//! let team = Team::new("Team A")
//!     .with_card(Card::new("Alice").with_label(Label::new("Dev").unwrap()));
//!
//! let gatekeeper = Gatekeeper::default_config();
//! let status = gatekeeper.check_team(&team, &constraints);
//! assert_eq!(status.severity, Severity::Violation);
//! assert_eq!(status.messages(), vec!["Not enough members"]);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod parser;
mod status;
mod validator;

pub use config::{GatekeeperConfig, StatusColors};
pub use error::GatekeeperError;
pub use parser::{find_constraints_list, parse_constraints, parse_leading_int};
pub use status::TeamStatus;
pub use validator::{check_team_roles, check_team_size, evaluate, Gatekeeper};

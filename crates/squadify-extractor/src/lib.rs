//! Squadify Extractor
//!
//! Turns a team snapshot into typed tallies.
//!
//! # Overview
//!
//! The Extractor is the first step of every team check. It reads the cards of
//! one list and produces:
//!
//! - **Role counts**: how many cards bear each label
//! - **Member count**: how many cards are actual people (labeled, not concern)
//! - **Field aggregate**: field → value → role → count over every labeled card
//!
//! # Architecture
//!
//! ```text
//! Snapshot JSON → parse_team → Team → Extractor → counts → Gatekeeper / Charts
//! ```
//!
//! # Example Usage
//!
//! ```
//! use squadify_extractor::{count_roles, count_team_members, extract_fields, parse_team};
//! use squadify_domain::LabelFilter;
//!
//! # fn example() -> Result<(), squadify_extractor::ExtractorError> {
//! let team = parse_team(r#"{
//!     "name": "Team Alpha",
//!     "cards": [
//!         { "title": "Alice", "labels": ["Dev"], "fields": ["Confidence: 4"] },
//!         { "title": "Bob", "labels": ["Tester"], "fields": ["Confidence: 3"] },
//!         { "title": "Hire a lead", "labels": ["concern"] }
//!     ]
//! }"#)?;
//!
//! let roles = count_roles(&team, &LabelFilter::none());
//! assert_eq!(roles.get("concern"), 1);
//! assert_eq!(count_team_members(&team), 2);
//!
//! let fields = extract_fields(&team);
//! assert_eq!(fields.get("Confidence").unwrap()["4"].get("Dev"), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod snapshot;

pub use error::ExtractorError;
pub use extractor::{count_roles, count_team_members, extract_fields, extract_team, TeamExtract};
pub use snapshot::parse_team;

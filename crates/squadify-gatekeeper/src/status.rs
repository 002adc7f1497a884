//! Team status record

use serde::{Deserialize, Serialize};
use squadify_domain::{Concern, Severity, Violation};

/// Outcome of checking one team against the constraints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatus {
    /// Number of members (labelled, non-concern cards)
    pub member_count: usize,

    /// Hard violations, in rule order
    pub violations: Vec<Violation>,

    /// Soft concerns; only populated when there are no violations
    pub concerns: Vec<Concern>,

    /// Overall severity
    pub severity: Severity,

    /// Colour for the team's status area
    pub status_color: String,
}

impl TeamStatus {
    /// Whether every constraint is met
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Status lines as shown under the member count
    ///
    /// Violations when there are any, concerns otherwise.
    pub fn messages(&self) -> Vec<String> {
        if self.violations.is_empty() {
            self.concerns.iter().map(ToString::to_string).collect()
        } else {
            self.violations.iter().map(ToString::to_string).collect()
        }
    }
}

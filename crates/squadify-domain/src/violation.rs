//! Results of checking a team: hard violations, soft concerns, severity

use serde::{Deserialize, Serialize};
use std::fmt;

/// A constraint the team does not satisfy
///
/// `Display` renders the reason text shown in the team's status area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The role is present but below its minimum
    NotEnoughRole {
        /// Role label
        role: String,
        /// Required minimum
        required: usize,
        /// Cards with the role in the team
        actual: usize,
    },

    /// A required role has no cards in the team
    MissingRole {
        /// Role label
        role: String,
    },

    /// The team is at or below the exclusive minimum size
    NotEnoughMembers {
        /// Team size
        size: usize,
    },

    /// The team is at or above the exclusive maximum size
    TooManyMembers {
        /// Team size
        size: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::NotEnoughRole { role, .. } => write!(f, "Not enough {}s", role),
            Violation::MissingRole { role } => write!(f, "No {}", role),
            Violation::NotEnoughMembers { .. } => f.write_str("Not enough members"),
            Violation::TooManyMembers { .. } => f.write_str("Too many members"),
        }
    }
}

/// A non-blocking notice about a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Concern {
    /// A card labeled `concern`; carries the card's title
    FlaggedCard {
        /// Card title
        title: String,
    },

    /// Average confidence is below the configured floor
    LowConfidence {
        /// Team average confidence
        average: f64,
    },
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Concern::FlaggedCard { title } => f.write_str(title),
            Concern::LowConfidence { average } => {
                write!(f, "Low confidence score ({:.1})", average)
            }
        }
    }
}

/// Three-state team status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// No violations and no concerns
    Compliant,

    /// No violations, but at least one concern
    Concern,

    /// At least one violation
    Violation,
}

impl Severity {
    /// Derive the severity from a team's violations and concerns
    pub fn classify(violations: &[Violation], concerns: &[Concern]) -> Self {
        if !violations.is_empty() {
            Severity::Violation
        } else if !concerns.is_empty() {
            Severity::Concern
        } else {
            Severity::Compliant
        }
    }

    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Compliant => "compliant",
            Severity::Concern => "concern",
            Severity::Violation => "violation",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let not_enough = Violation::NotEnoughRole {
            role: "Dev".to_string(),
            required: 3,
            actual: 1,
        };
        assert_eq!(not_enough.to_string(), "Not enough Devs");
        assert_eq!(
            Violation::MissingRole { role: "Lead".to_string() }.to_string(),
            "No Lead"
        );
        assert_eq!(Violation::NotEnoughMembers { size: 3 }.to_string(), "Not enough members");
        assert_eq!(Violation::TooManyMembers { size: 12 }.to_string(), "Too many members");
    }

    #[test]
    fn test_concern_messages() {
        let flagged = Concern::FlaggedCard {
            title: "Tester leaving in May".to_string(),
        };
        assert_eq!(flagged.to_string(), "Tester leaving in May");
        assert_eq!(
            Concern::LowConfidence { average: 7.0 / 3.0 }.to_string(),
            "Low confidence score (2.3)"
        );
    }

    #[test]
    fn test_severity_precedence() {
        let violation = vec![Violation::MissingRole { role: "Dev".to_string() }];
        let concern = vec![Concern::LowConfidence { average: 1.0 }];

        assert_eq!(Severity::classify(&violation, &concern), Severity::Violation);
        assert_eq!(Severity::classify(&[], &concern), Severity::Concern);
        assert_eq!(Severity::classify(&[], &[]), Severity::Compliant);
    }
}

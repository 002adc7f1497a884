//! Team module - a named list of cards

use crate::{Card, WILDCARD_MARKER};
use serde::{Deserialize, Serialize};

/// Default name of the list holding the constraint directives
pub const DEFAULT_CONSTRAINTS_LIST_NAME: &str = "Squadification Constraints";

/// A list on the board
///
/// Most lists are teams; the constraints list shares the same shape but its
/// cards encode constraints rather than members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// List name as shown in the list header
    pub name: String,

    /// Cards in list order
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Team {
    /// Create an empty list
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Append a card
    pub fn with_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Check the snapshot shape (non-empty name)
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("List name must not be empty".to_string());
        }
        Ok(())
    }

    /// Whether the list name contains the wildcard marker
    pub fn is_wildcard(&self) -> bool {
        self.name.contains(WILDCARD_MARKER)
    }

    /// Whether this is the constraints list
    pub fn is_constraints_list(&self, constraints_list_name: &str) -> bool {
        self.name == constraints_list_name
    }

    /// Whether this list takes part in team analytics
    ///
    /// Wildcard lists and the constraints list are excluded.
    pub fn is_team(&self, constraints_list_name: &str) -> bool {
        !self.is_wildcard() && !self.is_constraints_list(constraints_list_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_selection() {
        assert!(Team::new("Team Alpha").is_team(DEFAULT_CONSTRAINTS_LIST_NAME));
        assert!(!Team::new("Backlog *").is_team(DEFAULT_CONSTRAINTS_LIST_NAME));
        assert!(!Team::new(DEFAULT_CONSTRAINTS_LIST_NAME).is_team(DEFAULT_CONSTRAINTS_LIST_NAME));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        assert!(Team::new("").validate().is_err());
        assert!(Team::new("Team Beta").validate().is_ok());
    }
}

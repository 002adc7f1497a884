//! Board snapshot

use crate::BoardError;
use serde::{Deserialize, Serialize};
use squadify_domain::traits::BoardSource;
use squadify_domain::{LabelColors, Team};
use squadify_extractor::parse_team;
use tracing::debug;

/// Every list on a board plus the board's label colours
///
/// JSON shape:
///
/// ```json
/// {
///   "lists": [
///     { "name": "Team A",
///       "cards": [ { "title": "Alice", "labels": ["Dev"], "fields": ["Confidence: 4"] } ] }
///   ],
///   "label_colors": { "Dev": "rgb(97, 189, 79)" }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Lists in board order
    #[serde(default)]
    pub lists: Vec<Team>,

    /// Label colours
    #[serde(default)]
    pub label_colors: LabelColors,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a list at the end of the board
    pub fn with_list(mut self, list: Team) -> Self {
        self.lists.push(list);
        self
    }

    /// Set the colour of a label
    pub fn with_label_color(mut self, label: &str, color: &str) -> Self {
        self.label_colors.insert(label, color);
        self
    }

    /// Parse a board snapshot
    ///
    /// A missing snapshot or one of the wrong shape is an invalid argument.
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        let trimmed = json.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(BoardError::InvalidArgument(
                "Board snapshot not specified".to_string(),
            ));
        }

        let board: Board = serde_json::from_str(trimmed)?;
        board.validate()?;
        debug!("Parsed board with {} lists", board.lists.len());
        Ok(board)
    }

    /// Serialize the board to pretty JSON
    pub fn to_json(&self) -> Result<String, BoardError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy a board out of any snapshot source
    pub fn from_source<S: BoardSource>(source: &S) -> Result<Self, S::Error> {
        Ok(Self {
            lists: source.lists()?,
            label_colors: source.label_colors()?,
        })
    }

    /// Check every list
    pub fn validate(&self) -> Result<(), BoardError> {
        for list in &self.lists {
            list.validate().map_err(BoardError::InvalidArgument)?;
        }
        Ok(())
    }

    /// First list with the given name
    pub fn list(&self, name: &str) -> Option<&Team> {
        self.lists.iter().find(|list| list.name == name)
    }

    /// First list with the given name, or not-found
    pub fn require_list(&self, name: &str) -> Result<&Team, BoardError> {
        self.list(name)
            .ok_or_else(|| BoardError::NotFound(format!("List '{}' not found", name)))
    }

    /// Replace the list of the same name, or append it
    pub fn upsert_list(&mut self, list: Team) {
        match self.lists.iter_mut().find(|l| l.name == list.name) {
            Some(existing) => *existing = list,
            None => self.lists.push(list),
        }
    }

    /// [`Board::upsert_list`] from a JSON team snapshot
    ///
    /// Returns the list's name.
    pub fn upsert_list_json(&mut self, json: &str) -> Result<String, BoardError> {
        let list = parse_team(json)?;
        let name = list.name.clone();
        self.upsert_list(list);
        Ok(name)
    }

    /// The constraints list
    ///
    /// Not-found when absent; an invalid argument when the name is ambiguous.
    pub fn constraints_list(&self, constraints_list_name: &str) -> Result<&Team, BoardError> {
        let found = squadify_gatekeeper::find_constraints_list(&self.lists, constraints_list_name)?;
        if self.constraints_list_count(constraints_list_name) > 1 {
            return Err(BoardError::InvalidArgument(format!(
                "More than one list named '{}'",
                constraints_list_name
            )));
        }
        Ok(found)
    }

    /// Whether the board has exactly one constraints list
    pub fn is_squadification_board(&self, constraints_list_name: &str) -> bool {
        self.constraints_list_count(constraints_list_name) == 1
    }

    /// Lists that take part in team analytics, in board order
    pub fn team_lists<'a>(
        &'a self,
        constraints_list_name: &'a str,
    ) -> impl Iterator<Item = &'a Team> + 'a {
        self.lists
            .iter()
            .filter(move |list| list.is_team(constraints_list_name))
    }

    /// Reject boards where two team lists share a name
    ///
    /// Reports are keyed by team name, so each team list must be unique.
    pub fn check_team_names(&self, constraints_list_name: &str) -> Result<(), BoardError> {
        let mut seen = std::collections::BTreeSet::new();
        for team in self.team_lists(constraints_list_name) {
            if !seen.insert(team.name.as_str()) {
                return Err(BoardError::InvalidArgument(format!(
                    "More than one list named '{}'",
                    team.name
                )));
            }
        }
        Ok(())
    }

    fn constraints_list_count(&self, constraints_list_name: &str) -> usize {
        self.lists
            .iter()
            .filter(|list| list.is_constraints_list(constraints_list_name))
            .count()
    }
}

impl BoardSource for Board {
    type Error = BoardError;

    fn lists(&self) -> Result<Vec<Team>, BoardError> {
        Ok(self.lists.clone())
    }

    fn label_colors(&self) -> Result<LabelColors, BoardError> {
        Ok(self.label_colors.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadify_domain::DEFAULT_CONSTRAINTS_LIST_NAME;

    const BOARD: &str = r##"{
        "lists": [
            { "name": "Ideas *" },
            { "name": "Squadification Constraints",
              "cards": [ { "title": "Dev", "labels": ["Dev"] }, { "title": "size > 1" } ] },
            { "name": "Team A",
              "cards": [ { "title": "Alice", "labels": ["Dev"], "fields": ["Confidence: 4"] } ] },
            { "name": "Team B" }
        ],
        "label_colors": { "Dev": "#61bd4f" }
    }"##;

    #[test]
    fn test_from_json() {
        let board = Board::from_json(BOARD).unwrap();
        assert_eq!(board.lists.len(), 4);
        assert_eq!(board.label_colors.get("Dev"), Some("#61bd4f"));
        assert!(board.is_squadification_board(DEFAULT_CONSTRAINTS_LIST_NAME));
    }

    #[test]
    fn test_from_json_rejects_missing_and_malformed() {
        assert!(matches!(Board::from_json(" "), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(Board::from_json("null"), Err(BoardError::InvalidArgument(_))));
        assert!(matches!(
            Board::from_json(r#"{"lists": [{"name": ""}]}"#),
            Err(BoardError::InvalidArgument(_))
        ));
        assert!(matches!(
            Board::from_json(r#"{"lists": 3}"#),
            Err(BoardError::InvalidArgument(_))
        ));
        assert!(matches!(Board::from_json("{lists"), Err(BoardError::Json(_))));
    }

    #[test]
    fn test_team_lists_skip_wildcard_and_constraints() {
        let board = Board::from_json(BOARD).unwrap();
        let names: Vec<&str> = board
            .team_lists(DEFAULT_CONSTRAINTS_LIST_NAME)
            .map(|list| list.name.as_str())
            .collect();
        assert_eq!(names, vec!["Team A", "Team B"]);
    }

    #[test]
    fn test_constraints_list_lookup() {
        let board = Board::from_json(BOARD).unwrap();
        assert_eq!(
            board.constraints_list(DEFAULT_CONSTRAINTS_LIST_NAME).unwrap().cards.len(),
            2
        );
        assert!(matches!(
            board.constraints_list("Rules"),
            Err(BoardError::NotFound(_))
        ));
        assert!(!board.is_squadification_board("Rules"));
    }

    #[test]
    fn test_duplicate_constraints_lists() {
        let board = Board::new()
            .with_list(Team::new(DEFAULT_CONSTRAINTS_LIST_NAME))
            .with_list(Team::new(DEFAULT_CONSTRAINTS_LIST_NAME));

        assert!(!board.is_squadification_board(DEFAULT_CONSTRAINTS_LIST_NAME));
        assert!(matches!(
            board.constraints_list(DEFAULT_CONSTRAINTS_LIST_NAME),
            Err(BoardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_duplicate_team_names() {
        let board = Board::new()
            .with_list(Team::new(DEFAULT_CONSTRAINTS_LIST_NAME))
            .with_list(Team::new("Team A"))
            .with_list(Team::new("Team A"));
        assert!(matches!(
            board.check_team_names(DEFAULT_CONSTRAINTS_LIST_NAME),
            Err(BoardError::InvalidArgument(_))
        ));

        // Wildcard lists take no part in analytics and may repeat
        let board = Board::new()
            .with_list(Team::new("Team A"))
            .with_list(Team::new("Archive *"))
            .with_list(Team::new("Archive *"));
        assert!(board.check_team_names(DEFAULT_CONSTRAINTS_LIST_NAME).is_ok());
    }

    #[test]
    fn test_upsert_list() {
        let mut board = Board::from_json(BOARD).unwrap();

        let name = board
            .upsert_list_json(r#"{"name": "Team B", "cards": [{"title": "Bob", "labels": ["Dev"]}]}"#)
            .unwrap();
        assert_eq!(name, "Team B");
        assert_eq!(board.lists.len(), 4);
        assert_eq!(board.require_list("Team B").unwrap().cards.len(), 1);

        board.upsert_list(Team::new("Team C"));
        assert_eq!(board.lists.len(), 5);

        assert!(matches!(board.require_list("Team Z"), Err(BoardError::NotFound(_))));
        assert!(matches!(
            board.upsert_list_json("null"),
            Err(BoardError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_board_source_roundtrip() {
        let board = Board::from_json(BOARD).unwrap();
        let copy = Board::from_source(&board).unwrap();
        assert_eq!(copy, board);

        let json = board.to_json().unwrap();
        assert_eq!(Board::from_json(&json).unwrap(), board);
    }
}

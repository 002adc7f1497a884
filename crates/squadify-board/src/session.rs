//! Analytics session: the engine state between notifications

use crate::{Board, BoardError, SessionMetrics, TeamReport};
use serde::{Deserialize, Serialize};
use squadify_charts::extract_charts;
use squadify_domain::{ConstraintSet, LabelColors, Team};
use squadify_extractor::extract_team;
use squadify_gatekeeper::{parse_constraints, Gatekeeper, GatekeeperConfig};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Something on the board changed
///
/// The collaborator watching the board decides when to send these; the
/// session does no change detection of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeNotification {
    /// The constraints list was edited
    ConstraintsChanged,

    /// A team list gained, lost or edited cards
    TeamChanged {
        /// List name
        name: String,
    },
}

/// Engine state for one board
///
/// Holds the parsed constraints, the label colours and the latest report of
/// every team. Every operation is idempotent: repeating it with the same
/// board changes nothing and reports nothing.
///
/// # Examples
///
/// ```
/// use squadify_board::{AnalyticsSession, Board, ChangeNotification};
///
/// # fn main() -> Result<(), squadify_board::BoardError> {
/// let mut board = Board::from_json(r#"{
///     "lists": [
///         { "name": "Squadification Constraints", "cards": [ { "title": "size > 1" } ] },
///         { "name": "Team A", "cards": [ { "title": "Alice", "labels": ["Dev"] } ] }
///     ]
/// }"#)?;
///
/// let mut session = AnalyticsSession::default_config();
/// let reports = session.load_board(&board)?;
/// assert_eq!(reports[0].status.messages(), vec!["Not enough members"]);
///
/// board.upsert_list_json(r#"{ "name": "Team A", "cards": [
///     { "title": "Alice", "labels": ["Dev"] },
///     { "title": "Bob", "labels": ["Dev"] }
/// ] }"#)?;
/// let changed = session.handle(&ChangeNotification::TeamChanged { name: "Team A".into() }, &board)?;
/// assert!(changed[0].status.is_valid());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct AnalyticsSession {
    gatekeeper: Gatekeeper,
    constraints: Option<ConstraintSet>,
    label_colors: LabelColors,
    reports: BTreeMap<String, TeamReport>,
    metrics: SessionMetrics,
}

impl AnalyticsSession {
    /// Create a new session with the given configuration
    pub fn new(config: GatekeeperConfig) -> Self {
        Self {
            gatekeeper: Gatekeeper::new(config),
            ..Self::default()
        }
    }

    /// Create a session with default configuration
    pub fn default_config() -> Self {
        Self::new(GatekeeperConfig::default())
    }

    /// Current configuration
    pub fn config(&self) -> &GatekeeperConfig {
        self.gatekeeper.config()
    }

    /// Constraints in force, once loaded
    pub fn constraints(&self) -> Option<&ConstraintSet> {
        self.constraints.as_ref()
    }

    /// Label colours adopted from the board
    pub fn label_colors(&self) -> &LabelColors {
        &self.label_colors
    }

    /// Latest report for a team
    pub fn report(&self, team: &str) -> Option<&TeamReport> {
        self.reports.get(team)
    }

    /// Latest report of every team, alphabetically
    pub fn reports(&self) -> impl Iterator<Item = &TeamReport> {
        self.reports.values()
    }

    /// Get a reference to the current metrics
    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Reset metrics counters
    pub fn reset_metrics(&mut self) {
        self.metrics.reset();
    }

    /// Start over with a new board
    ///
    /// Adopts the board's colours, parses its constraints list (not-found
    /// if absent) and evaluates every team. Returns all reports in board
    /// order.
    pub fn load_board(&mut self, board: &Board) -> Result<Vec<TeamReport>, BoardError> {
        self.reports.clear();
        self.constraints = None;
        self.reload(board)?;

        let reports = self.evaluate_board(board)?;
        info!("Loaded board: {} teams", reports.len());
        for report in &reports {
            self.store(report.clone());
        }
        Ok(reports)
    }

    /// The constraints list changed: reparse it and re-evaluate every team
    ///
    /// Returns the reports that differ from the previous ones, in board
    /// order. Teams no longer on the board are forgotten.
    pub fn constraints_changed(&mut self, board: &Board) -> Result<Vec<TeamReport>, BoardError> {
        self.reload(board)?;

        let reports = self.evaluate_board(board)?;
        self.reports
            .retain(|name, _| reports.iter().any(|report| &report.team == name));

        Ok(reports
            .into_iter()
            .filter_map(|report| self.store(report))
            .collect())
    }

    /// One team changed: re-evaluate it alone
    ///
    /// Returns the new report, or `None` when it is unchanged. Fails with an
    /// invalid argument if constraints were never loaded or the list is not
    /// a team.
    pub fn team_changed(&mut self, team: &Team) -> Result<Option<TeamReport>, BoardError> {
        let constraints = self.constraints.as_ref().ok_or_else(|| {
            BoardError::InvalidArgument("Constraints not loaded".to_string())
        })?;

        let report = self.evaluate(team, constraints)?;
        Ok(self.store(report))
    }

    /// Dispatch a change notification
    ///
    /// Returns the reports whose content changed.
    pub fn handle(
        &mut self,
        notification: &ChangeNotification,
        board: &Board,
    ) -> Result<Vec<TeamReport>, BoardError> {
        debug!("Handling {:?}", notification);
        let result = match notification {
            ChangeNotification::ConstraintsChanged => self.constraints_changed(board),
            ChangeNotification::TeamChanged { name } => board
                .require_list(name)
                .and_then(|team| self.team_changed(team))
                .map(|report| report.into_iter().collect()),
        };

        if let Err(e) = &result {
            warn!("Notification {:?} failed: {}", notification, e);
            self.metrics.record_failure();
        }
        result
    }

    fn reload(&mut self, board: &Board) -> Result<(), BoardError> {
        let list = board.constraints_list(&self.config().constraints_list_name)?;
        let constraints = parse_constraints(list);

        self.label_colors = board.label_colors.clone();
        self.constraints = Some(constraints);
        self.metrics.record_reload();
        info!("Constraints reloaded from '{}'", list.name);
        Ok(())
    }

    fn evaluate_board(&self, board: &Board) -> Result<Vec<TeamReport>, BoardError> {
        let constraints = self.constraints.as_ref().ok_or_else(|| {
            BoardError::InvalidArgument("Constraints not loaded".to_string())
        })?;

        let constraints_list_name = &self.config().constraints_list_name;
        board.check_team_names(constraints_list_name)?;
        board
            .team_lists(constraints_list_name)
            .map(|team| self.evaluate(team, constraints))
            .collect()
    }

    fn evaluate(&self, team: &Team, constraints: &ConstraintSet) -> Result<TeamReport, BoardError> {
        self.gatekeeper.ensure_team(team)?;

        let config = self.config();
        let extract = extract_team(team);
        Ok(TeamReport {
            team: team.name.clone(),
            status: self.gatekeeper.check_extract(team, &extract, constraints),
            average_confidence: self.gatekeeper.team_confidence(&extract.fields),
            charts: extract_charts(&extract, &self.label_colors, &config.confidence_field),
        })
    }

    /// Keep a report; returns it again if it differs from the previous one
    fn store(&mut self, report: TeamReport) -> Option<TeamReport> {
        let changed = self
            .reports
            .get(&report.team)
            .map_or(true, |previous| !previous.same_as(&report));

        self.metrics.record_evaluation(report.status.severity, changed);
        self.reports.insert(report.team.clone(), report.clone());
        changed.then_some(report)
    }
}

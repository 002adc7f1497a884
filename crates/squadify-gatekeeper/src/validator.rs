//! Team constraint evaluation

use crate::{GatekeeperConfig, GatekeeperError, TeamStatus};
use squadify_domain::{
    average_confidence, is_low_confidence, Concern, ConstraintSet, FieldAggregate, RoleCounts,
    Severity, Team, Violation,
};
use squadify_extractor::{extract_team, TeamExtract};
use tracing::debug;

/// Check role counts against the role minimums
///
/// Roles are visited alphabetically. A role that is present but short yields
/// [`Violation::NotEnoughRole`]; a required role with no cards at all yields
/// [`Violation::MissingRole`] instead. All role shortfalls come first, then
/// all missing roles.
pub fn check_team_roles(role_counts: &RoleCounts, constraints: &ConstraintSet) -> Vec<Violation> {
    let minimums = &constraints.role_minimums;
    let mut violations = Vec::new();

    for (role, count) in role_counts.iter() {
        let required = minimums.get(role);
        if count > 0 && minimums.contains(role) && count < required {
            violations.push(Violation::NotEnoughRole {
                role: role.to_string(),
                required,
                actual: count,
            });
        }
    }

    for (role, _) in minimums.iter() {
        if role_counts.get(role) == 0 {
            violations.push(Violation::MissingRole {
                role: role.to_string(),
            });
        }
    }

    violations
}

/// Check the member count against the exclusive size bounds
///
/// At most one violation: the lower bound is checked first. NaN bounds never
/// fire.
pub fn check_team_size(team_size: usize, constraints: &ConstraintSet) -> Vec<Violation> {
    let size = team_size as f64;
    match (constraints.team_min_size, constraints.team_max_size) {
        (Some(min), _) if size <= min => vec![Violation::NotEnoughMembers { size: team_size }],
        (_, Some(max)) if size >= max => vec![Violation::TooManyMembers { size: team_size }],
        _ => Vec::new(),
    }
}

/// Evaluate a team against the constraints
///
/// Role violations first, then at most one size violation. An empty result
/// means every constraint is met.
pub fn evaluate(
    team_size: usize,
    role_counts: &RoleCounts,
    constraints: &ConstraintSet,
) -> Vec<Violation> {
    let mut violations = check_team_roles(role_counts, constraints);
    violations.extend(check_team_size(team_size, constraints));
    violations
}

/// The Gatekeeper checks teams against the board's constraints
#[derive(Debug, Clone, Default)]
pub struct Gatekeeper {
    config: GatekeeperConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: GatekeeperConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(GatekeeperConfig::default())
    }

    /// Current configuration
    pub fn config(&self) -> &GatekeeperConfig {
        &self.config
    }

    /// Average confidence of a team from its field aggregate
    pub fn team_confidence(&self, fields: &FieldAggregate) -> Option<f64> {
        average_confidence(fields.get(&self.config.confidence_field))
    }

    /// Check a team against the constraints
    ///
    /// # Arguments
    ///
    /// * `team` - The team list snapshot
    /// * `constraints` - Constraints parsed from the constraints list
    ///
    /// # Returns
    ///
    /// The team's violations, concerns, member count and status colour
    pub fn check_team(&self, team: &Team, constraints: &ConstraintSet) -> TeamStatus {
        let extract = extract_team(team);
        self.check_extract(team, &extract, constraints)
    }

    /// Reject lists that take no part in team analytics
    ///
    /// Wildcard lists and the constraints list itself are invalid arguments.
    pub fn ensure_team(&self, team: &Team) -> Result<(), GatekeeperError> {
        if team.is_team(&self.config.constraints_list_name) {
            Ok(())
        } else {
            Err(GatekeeperError::InvalidArgument(format!(
                "List '{}' is not a team",
                team.name
            )))
        }
    }

    /// Check a board list, rejecting lists that are not teams
    pub fn check_team_list(
        &self,
        team: &Team,
        constraints: &ConstraintSet,
    ) -> Result<TeamStatus, GatekeeperError> {
        self.ensure_team(team)?;
        Ok(self.check_team(team, constraints))
    }

    /// Check a team whose extraction has already been run
    pub fn check_extract(
        &self,
        team: &Team,
        extract: &TeamExtract,
        constraints: &ConstraintSet,
    ) -> TeamStatus {
        let violations = evaluate(extract.members, &extract.roles, constraints);

        // Concerns are only raised for teams that meet every constraint
        let mut concerns = Vec::new();
        if violations.is_empty() {
            concerns.extend(
                team.cards
                    .iter()
                    .filter(|card| card.is_concern())
                    .map(|card| Concern::FlaggedCard {
                        title: card.title.clone(),
                    }),
            );

            let average = self.team_confidence(&extract.fields);
            if is_low_confidence(average, constraints.min_confidence) {
                if let Some(average) = average {
                    concerns.push(Concern::LowConfidence { average });
                }
            }
        }

        let severity = Severity::classify(&violations, &concerns);
        debug!(
            "Team '{}': {} members, {} violations, {} concerns ({})",
            team.name,
            extract.members,
            violations.len(),
            concerns.len(),
            severity
        );

        TeamStatus {
            member_count: extract.members,
            violations,
            concerns,
            severity,
            status_color: self.config.status_colors.for_severity(severity).to_string(),
        }
    }
}

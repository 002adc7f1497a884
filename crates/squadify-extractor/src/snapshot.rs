//! Parse a collaborator's team snapshot

use crate::error::ExtractorError;
use squadify_domain::Team;
use tracing::debug;

/// Parse a JSON team snapshot
///
/// The snapshot must be an object with a non-empty `name` and an optional
/// `cards` array. A missing snapshot (`null`, empty input) or a snapshot of
/// the wrong shape is an invalid argument; nothing is defaulted.
pub fn parse_team(json: &str) -> Result<Team, ExtractorError> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(ExtractorError::InvalidArgument(
            "Team snapshot not specified".to_string(),
        ));
    }

    let team: Team = serde_json::from_str(trimmed)?;
    team.validate().map_err(ExtractorError::InvalidArgument)?;

    debug!("Parsed team '{}' with {} cards", team.name, team.cards.len());
    Ok(team)
}

//! Label and field extraction

use squadify_domain::{FieldAggregate, LabelFilter, RoleCounts, Team};
use tracing::debug;

/// Count labels across every card in a team
///
/// Every label that passes `filter` adds one to its bucket, so a card with
/// two labels contributes to two roles. With [`LabelFilter::none`] concern
/// labels are counted too, as a pseudo-role.
pub fn count_roles(team: &Team, filter: &LabelFilter) -> RoleCounts {
    let mut roles = RoleCounts::new();
    for label in team.cards.iter().flat_map(|card| card.labels.iter()) {
        if filter.allows(label) {
            roles.increment(label.as_str());
        }
    }
    roles
}

/// Count the people on a team
///
/// Every card with at least one label is a member, except concern cards.
pub fn count_team_members(team: &Team) -> usize {
    let members = team
        .cards
        .iter()
        .filter(|card| card.has_labels() && !card.is_concern())
        .count();
    debug!("# of team members in {}: {}", team.name, members);
    members
}

/// Tally every custom field by value and by the card's role
///
/// Cards without a role (no labels, or only wildcard labels) cannot be
/// attributed and are skipped.
pub fn extract_fields(team: &Team) -> FieldAggregate {
    let mut fields = FieldAggregate::new();
    for card in &team.cards {
        let Some(role) = card.primary_role() else {
            continue;
        };
        for field in card.parsed_fields() {
            fields.record(&field.name, &field.value, role.as_str());
        }
    }
    fields
}

/// Everything the engine extracts from one team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamExtract {
    /// All label counts, concern included
    pub roles: RoleCounts,

    /// Label counts without wildcard and concern labels
    pub main_roles: RoleCounts,

    /// Number of members
    pub members: usize,

    /// Field aggregate
    pub fields: FieldAggregate,
}

/// Run every extraction over a team
pub fn extract_team(team: &Team) -> TeamExtract {
    TeamExtract {
        roles: count_roles(team, &LabelFilter::none()),
        main_roles: count_roles(team, &LabelFilter::main_roles()),
        members: count_team_members(team),
        fields: extract_fields(team),
    }
}

//! Typed tallies extracted from a team
//!
//! Maps are ordered by key so every reader sees roles, values and fields
//! alphabetically, whatever order the cards were scanned in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Role label → number of cards bearing that label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleCounts(BTreeMap<String, usize>);

impl RoleCounts {
    /// Create empty counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one to a role's count
    pub fn increment(&mut self, role: &str) {
        *self.0.entry(role.to_string()).or_insert(0) += 1;
    }

    /// Set a role's count
    pub fn set(&mut self, role: impl Into<String>, count: usize) {
        self.0.insert(role.into(), count);
    }

    /// Count for a role, zero when absent
    pub fn get(&self, role: &str) -> usize {
        self.0.get(role).copied().unwrap_or(0)
    }

    /// Whether the role has an entry (even a zero one)
    pub fn contains(&self, role: &str) -> bool {
        self.0.contains_key(role)
    }

    /// Roles and counts in alphabetical role order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(role, count)| (role.as_str(), *count))
    }

    /// Roles in alphabetical order
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of distinct roles
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no roles
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for RoleCounts {
    fn from_iter<I: IntoIterator<Item = (S, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(role, count)| (role.into(), count)).collect())
    }
}

/// Field value → role → count, for a single field
pub type FieldValues = BTreeMap<String, RoleCounts>;

/// Field name → field value → role → count
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldAggregate(BTreeMap<String, FieldValues>);

impl FieldAggregate {
    /// Create an empty aggregate
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one card with `role` reporting `value` for `field`
    pub fn record(&mut self, field: &str, value: &str, role: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .entry(value.to_string())
            .or_default()
            .increment(role);
    }

    /// The value breakdown for a field, if any card used it
    pub fn get(&self, field: &str) -> Option<&FieldValues> {
        self.0.get(field)
    }

    /// Fields and their breakdowns in alphabetical field order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValues)> {
        self.0.iter().map(|(name, values)| (name.as_str(), values))
    }

    /// Number of distinct fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no field was seen
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

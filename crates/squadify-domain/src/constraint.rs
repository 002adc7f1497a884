//! Constraint set parsed from the constraints list

use crate::RoleCounts;
use serde::{Deserialize, Serialize};

/// Constraints every team is checked against
///
/// Bounds are exclusive: a team must have more than `team_min_size` and
/// fewer than `team_max_size` members. Inclusive directives (`>=`, `<=`) are
/// normalized when parsed. Bounds are `f64` because a directive without a
/// parsable number yields NaN, which is carried through rather than
/// corrected; every comparison against NaN is false, so such a bound never
/// fires.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// Minimum number of members per role
    #[serde(default)]
    pub role_minimums: RoleCounts,

    /// Exclusive lower bound on team size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_min_size: Option<f64>,

    /// Exclusive upper bound on team size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_max_size: Option<f64>,

    /// Exclusive lower bound on average confidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_confidence: Option<f64>,
}

impl ConstraintSet {
    /// A constraint set that every team satisfies
    pub fn unconstrained() -> Self {
        Self::default()
    }

    /// Whether no constraint of any kind is configured
    pub fn is_empty(&self) -> bool {
        self.role_minimums.is_empty()
            && self.team_min_size.is_none()
            && self.team_max_size.is_none()
            && self.min_confidence.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_is_empty() {
        assert!(ConstraintSet::unconstrained().is_empty());

        let constraints = ConstraintSet {
            team_min_size: Some(4.0),
            ..ConstraintSet::default()
        };
        assert!(!constraints.is_empty());
    }

    #[test]
    fn test_unset_bounds_are_omitted_from_json() {
        let constraints = ConstraintSet {
            role_minimums: [("Dev", 2)].into_iter().collect(),
            team_max_size: Some(8.0),
            ..ConstraintSet::default()
        };
        let json = serde_json::to_string(&constraints).unwrap();
        assert_eq!(json, r#"{"role_minimums":{"Dev":2},"team_max_size":8.0}"#);
    }
}

//! Constraint parsing from the constraints list
//!
//! Labelled cards on the constraints list set role minimums: a list with
//! three `Dev` cards requires at least three Devs per team. Card titles carry
//! the remaining directives:
//!
//! - `size > N` / `size >= N`: exclusive lower bound on team size
//! - `size < N` / `size <= N`: exclusive upper bound on team size
//! - `confidence > N` / `confidence >= N`: floor on average confidence
//!
//! Inclusive forms are normalized to exclusive bounds (`>= N` becomes `N - 1`,
//! `<= N` becomes `N + 1`).

use crate::GatekeeperError;
use squadify_domain::{ConstraintSet, LabelFilter, Team};
use squadify_extractor::count_roles;
use tracing::{debug, warn};

const MIN_SIZE_DIRECTIVE: &str = "size >";
const MAX_SIZE_DIRECTIVE: &str = "size <";
const MIN_CONFIDENCE_DIRECTIVE: &str = "confidence >";

/// Locate the constraints list among a board's lists
pub fn find_constraints_list<'a>(
    lists: &'a [Team],
    constraints_list_name: &str,
) -> Result<&'a Team, GatekeeperError> {
    lists
        .iter()
        .find(|list| list.is_constraints_list(constraints_list_name))
        .ok_or_else(|| {
            GatekeeperError::NotFound(format!("List '{}' not found", constraints_list_name))
        })
}

/// Parse the constraints list into a [`ConstraintSet`]
///
/// A directive without a number parses to NaN, which is kept as-is.
pub fn parse_constraints(constraints: &Team) -> ConstraintSet {
    let set = ConstraintSet {
        role_minimums: count_roles(constraints, &LabelFilter::none()),
        team_min_size: find_directive(constraints, MIN_SIZE_DIRECTIVE)
            .map(|title| parse_bound(title, '>')),
        team_max_size: find_directive(constraints, MAX_SIZE_DIRECTIVE)
            .map(|title| parse_bound(title, '<')),
        min_confidence: find_directive(constraints, MIN_CONFIDENCE_DIRECTIVE)
            .map(|title| parse_bound(title, '>')),
    };

    debug!(
        "Constraints from '{}': {} roles, min size {:?}, max size {:?}, min confidence {:?}",
        constraints.name,
        set.role_minimums.len(),
        set.team_min_size,
        set.team_max_size,
        set.min_confidence
    );
    set
}

/// Title of the first card containing `directive`; later ones are ignored
fn find_directive<'a>(constraints: &'a Team, directive: &str) -> Option<&'a str> {
    let mut matches = constraints
        .cards
        .iter()
        .map(|card| card.title.as_str())
        .filter(|title| title.contains(directive));

    let first = matches.next()?;
    for ignored in matches {
        warn!(
            "Ignoring duplicate '{}' directive in '{}': \"{}\"",
            directive, constraints.name, ignored
        );
    }
    Some(first)
}

/// Parse the number after the directive's comparison operator
fn parse_bound(title: &str, op: char) -> f64 {
    let inclusive = format!("{}=", op);
    if let Some(idx) = title.find(&inclusive) {
        let value = parse_leading_int(&title[idx + inclusive.len()..]);
        if op == '>' {
            value - 1.0
        } else {
            value + 1.0
        }
    } else if let Some(idx) = title.find(op) {
        parse_leading_int(&title[idx + op.len_utf8()..])
    } else {
        f64::NAN
    }
}

/// Leading-integer parse: whitespace, optional sign, then decimal digits up
/// to the first non-digit. NaN when there are no digits.
pub fn parse_leading_int(text: &str) -> f64 {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return f64::NAN;
    }

    // Digit runs too long for i64 still parse as f64
    let value: f64 = digits.parse().unwrap_or(f64::NAN);
    if negative {
        -value
    } else {
        value
    }
}

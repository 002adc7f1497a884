//! Team confidence aggregation
//!
//! Members self-report confidence through a `Confidence: N` field badge with
//! N in 1..=5. The team score is the member-weighted mean of those levels.

use crate::FieldValues;
use std::ops::RangeInclusive;

/// Name of the field carrying self-reported confidence
pub const CONFIDENCE_FIELD: &str = "Confidence";

/// Confidence levels that contribute to the average
pub const CONFIDENCE_LEVELS: RangeInclusive<u32> = 1..=5;

/// Average confidence of a team
///
/// `field` is the `Confidence` breakdown (level → role → count) from the
/// team's field aggregate. Returns `None` when no member used the field at
/// all. Only levels `"1"` to `"5"` are weighed; any other value is ignored.
/// When nothing qualifies the result is `0.0 / 0.0`, i.e. NaN, and callers
/// must check for it before formatting.
///
/// # Examples
///
/// ```
/// use squadify_domain::{average_confidence, FieldValues, RoleCounts};
///
/// let mut field = FieldValues::new();
/// field.insert("2".to_string(), [("Dev", 1)].into_iter().collect::<RoleCounts>());
/// field.insert("4".to_string(), [("Dev", 1)].into_iter().collect::<RoleCounts>());
///
/// assert_eq!(average_confidence(Some(&field)), Some(3.0));
/// assert_eq!(average_confidence(None), None);
/// ```
pub fn average_confidence(field: Option<&FieldValues>) -> Option<f64> {
    let field = field?;

    let mut weighted: u64 = 0;
    let mut members: u64 = 0;
    for level in CONFIDENCE_LEVELS {
        if let Some(counts) = field.get(&level.to_string()) {
            for (_, count) in counts.iter() {
                weighted += u64::from(level) * count as u64;
                members += count as u64;
            }
        }
    }

    Some(weighted as f64 / members as f64)
}

/// Whether an average confidence falls below the configured floor
///
/// The floor is exclusive (`confidence > N` parses to `N`), so a team is
/// low-confidence when its average is below the next whole level:
/// `average < min_confidence + 1`. Undefined or NaN averages are never low.
pub fn is_low_confidence(average: Option<f64>, min_confidence: Option<f64>) -> bool {
    match (average, min_confidence) {
        (Some(average), Some(min)) => average < min + 1.0,
        _ => false,
    }
}

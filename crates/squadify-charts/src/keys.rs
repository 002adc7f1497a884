//! Key ordering helpers

use squadify_domain::FieldValues;

/// Alphabetically sorted, duplicate-free copy of `keys`
///
/// ```
/// use squadify_charts::sorted_keys;
///
/// assert_eq!(sorted_keys(["b", "a", "b"]), vec!["a", "b"]);
/// ```
pub fn sorted_keys<I, S>(keys: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut keys: Vec<String> = keys.into_iter().map(Into::into).collect();
    keys.sort();
    keys.dedup();
    keys
}

/// Every role that appears under any value of a field, sorted
pub fn distinct_inner_keys(field: &FieldValues) -> Vec<String> {
    sorted_keys(field.values().flat_map(|roles| roles.roles()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use squadify_domain::RoleCounts;

    #[test]
    fn test_sorted_keys() {
        assert_eq!(sorted_keys(["Tester", "Dev", "Lead"]), vec!["Dev", "Lead", "Tester"]);
        assert!(sorted_keys(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_sorted_keys_is_stable_and_deduplicated() {
        let once = sorted_keys(["b", "a", "c", "a"]);
        assert_eq!(once, vec!["a", "b", "c"]);
        assert_eq!(sorted_keys(once.clone()), once);
    }

    #[test]
    fn test_distinct_inner_keys() {
        let mut field = FieldValues::new();
        field.insert("Oslo".to_string(), [("Dev", 1), ("Lead", 1)].into_iter().collect::<RoleCounts>());
        field.insert("Bergen".to_string(), [("Tester", 2), ("Dev", 1)].into_iter().collect::<RoleCounts>());

        assert_eq!(distinct_inner_keys(&field), vec!["Dev", "Lead", "Tester"]);
        assert!(distinct_inner_keys(&FieldValues::new()).is_empty());
    }
}

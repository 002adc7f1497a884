//! Label module - card labels and label filters

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that makes a label a wildcard (ignored in aggregate counts)
pub const WILDCARD_MARKER: &str = "*";

/// Name of the label that flags a card as a concern rather than a member
pub const CONCERN_LABEL: &str = "concern";

/// A card label
///
/// Names are case-sensitive and never empty. A name containing `*` is a
/// wildcard label; the literal name `concern` flags a concern card.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(String);

impl Label {
    /// Create a label, rejecting empty names
    ///
    /// # Examples
    ///
    /// ```
    /// use squadify_domain::Label;
    ///
    /// let label = Label::new("Dev").unwrap();
    /// assert_eq!(label.as_str(), "Dev");
    /// assert!(Label::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.is_empty() {
            return Err("Label name must not be empty".to_string());
        }
        Ok(Self(name))
    }

    /// Get the label name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this label is a wildcard (name contains `*`)
    pub fn is_wildcard(&self) -> bool {
        self.0.contains(WILDCARD_MARKER)
    }

    /// Whether this is the `concern` label
    pub fn is_concern(&self) -> bool {
        self.0 == CONCERN_LABEL
    }
}

impl TryFrom<String> for Label {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Label {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl std::str::FromStr for Label {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exclusion filter applied when counting labels
///
/// A label is excluded when its name contains any of the filter's patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelFilter {
    excluded: Vec<String>,
}

impl LabelFilter {
    /// A filter that excludes nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// Exclude wildcard and concern labels, leaving only real roles
    pub fn main_roles() -> Self {
        Self::excluding([WILDCARD_MARKER, CONCERN_LABEL])
    }

    /// Exclude labels containing any of the given patterns
    pub fn excluding<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the label passes the filter
    pub fn allows(&self, label: &Label) -> bool {
        !self
            .excluded
            .iter()
            .any(|pattern| label.as_str().contains(pattern.as_str()))
    }

    /// Whether a raw role name passes the filter
    pub fn allows_name(&self, name: &str) -> bool {
        !self.excluded.iter().any(|pattern| name.contains(pattern.as_str()))
    }
}

//! Card module - a single card in a list, with its labels and field badges

use crate::Label;
use serde::{Deserialize, Serialize};

/// Separator between a field's name and value in badge text
const FIELD_SEPARATOR: &str = ": ";

/// A custom field parsed from badge text of the form `"Name: Value"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name (e.g. `Confidence`)
    pub name: String,
    /// Field value (e.g. `4`)
    pub value: String,
}

impl Field {
    /// Parse badge text into a field
    ///
    /// Text that does not split into exactly two parts on `": "`, or whose
    /// name part is empty, is not a custom field.
    ///
    /// # Examples
    ///
    /// ```
    /// use squadify_domain::Field;
    ///
    /// let field = Field::parse("Confidence: 4").unwrap();
    /// assert_eq!(field.name, "Confidence");
    /// assert_eq!(field.value, "4");
    ///
    /// assert!(Field::parse("3 comments").is_none());
    /// assert!(Field::parse("a: b: c").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let parts: Vec<&str> = text.split(FIELD_SEPARATOR).collect();
        if parts.len() != 2 || parts[0].is_empty() {
            return None;
        }
        Some(Self {
            name: parts[0].to_string(),
            value: parts[1].to_string(),
        })
    }
}

/// A card as seen by the engine
///
/// `title` is the card's own visible text, without nested annotations.
/// `fields` holds the raw badge texts; only those that parse as
/// [`Field`]s are meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card title
    #[serde(default)]
    pub title: String,

    /// Labels in display order
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Raw badge texts
    #[serde(default)]
    pub fields: Vec<String>,
}

impl Card {
    /// Create an unlabeled card with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            labels: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a label
    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    /// Add a raw badge text
    pub fn with_field(mut self, text: impl Into<String>) -> Self {
        self.fields.push(text.into());
        self
    }

    /// Whether the card carries at least one label
    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }

    /// Whether the card carries the `concern` label
    pub fn is_concern(&self) -> bool {
        self.labels.iter().any(Label::is_concern)
    }

    /// The card's role: its first non-wildcard label
    pub fn primary_role(&self) -> Option<&Label> {
        self.labels.iter().find(|label| !label.is_wildcard())
    }

    /// Parsed custom fields
    ///
    /// Fields keep the order in which their names first appear; when a name
    /// repeats, the later badge's value wins.
    pub fn parsed_fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = Vec::new();
        for field in self.fields.iter().filter_map(|text| Field::parse(text)) {
            match fields.iter_mut().find(|f| f.name == field.name) {
                Some(existing) => existing.value = field.value,
                None => fields.push(field),
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(name: &str) -> Label {
        Label::new(name).unwrap()
    }

    #[test]
    fn test_field_parse_requires_two_parts() {
        assert!(Field::parse("Location: Oslo").is_some());
        assert!(Field::parse("Location:Oslo").is_none());
        assert!(Field::parse("Time: 10: 30").is_none());
        assert!(Field::parse(": value").is_none());
    }

    #[test]
    fn test_field_value_may_be_empty() {
        let field = Field::parse("Location: ").unwrap();
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_primary_role_skips_wildcards() {
        let card = Card::new("Alice")
            .with_label(label("*External"))
            .with_label(label("Dev"))
            .with_label(label("Tester"));
        assert_eq!(card.primary_role().map(Label::as_str), Some("Dev"));

        let only_wildcards = Card::new("Bob").with_label(label("*External"));
        assert!(only_wildcards.primary_role().is_none());
        assert!(only_wildcards.has_labels());
    }

    #[test]
    fn test_concern_card() {
        let card = Card::new("Needs a tester").with_label(label("concern"));
        assert!(card.is_concern());
        assert_eq!(card.primary_role().map(Label::as_str), Some("concern"));
        assert!(!Card::new("Plain").is_concern());
    }

    #[test]
    fn test_parsed_fields_last_value_wins() {
        let card = Card::new("Alice")
            .with_field("Confidence: 2")
            .with_field("Location: Oslo")
            .with_field("not a field")
            .with_field("Confidence: 4");

        let fields = card.parsed_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "Confidence");
        assert_eq!(fields[0].value, "4");
        assert_eq!(fields[1].name, "Location");
    }

    #[test]
    fn test_card_deserializes_with_defaults() {
        let card: Card = serde_json::from_str(r#"{"title": "Carol"}"#).unwrap();
        assert_eq!(card.title, "Carol");
        assert!(card.labels.is_empty());
        assert!(card.fields.is_empty());
    }
}

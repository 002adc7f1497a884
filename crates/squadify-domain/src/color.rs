//! Label colour lookup supplied by the collaborator

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label name → CSS colour (`rgb(r, g, b)` or `#rrggbb`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelColors(BTreeMap<String, String>);

impl LabelColors {
    /// Create an empty lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the colour for a label
    pub fn insert(&mut self, label: impl Into<String>, color: impl Into<String>) {
        self.0.insert(label.into(), color.into());
    }

    /// Colour for a label, if known
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    /// Colour for a label with the given alpha applied
    ///
    /// Returns `None` when the label is unknown or its colour is neither
    /// `rgb(...)` nor `#rrggbb`.
    pub fn translucent(&self, label: &str, alpha: f64) -> Option<String> {
        let (r, g, b) = parse_rgb(self.get(label)?)?;
        Some(format!("rgba({}, {}, {}, {})", r, g, b, alpha))
    }

    /// Number of known labels
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no colours are known
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LabelColors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

fn parse_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let color = color.trim();

    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        return Some((channel(0)?, channel(2)?, channel(4)?));
    }

    let inner = color.strip_prefix("rgb(")?.strip_suffix(')')?;
    let channels: Vec<u8> = inner
        .split(',')
        .map(|part| part.trim().parse().ok())
        .collect::<Option<_>>()?;
    match channels.as_slice() {
        [r, g, b] => Some((*r, *g, *b)),
        _ => None,
    }
}

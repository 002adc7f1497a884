//! Chart record types handed to renderers

use serde::{Deserialize, Serialize};

/// Rendering hint for a chart record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Role distribution
    Doughnut,
    /// Field value breakdown, one stacked segment per role
    StackedBar,
    /// Confidence levels 1 to 5, one line per role
    Line,
}

/// Series colour: one for the whole series or one per category
///
/// Unknown labels have no colour and the renderer picks its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    /// Same colour for every point
    Single(Option<String>),
    /// Colour per category, aligned with the chart's categories
    PerCategory(Vec<Option<String>>),
}

/// One data series of a chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    /// Series label (a role, or empty for the role distribution)
    pub label: String,

    /// Values aligned with the chart's categories
    pub values: Vec<usize>,

    /// Series colour
    pub color: SeriesColor,

    /// Translucent area colour, for line charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
}

/// A renderer-agnostic chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Chart name
    pub name: String,

    /// Rendering hint
    pub kind: ChartKind,

    /// Category axis labels
    pub categories: Vec<String>,

    /// Data series
    pub series: Vec<Series>,
}

impl ChartSeries {
    /// Look up a series by label
    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }

    /// Whether the chart has nothing to draw
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.iter().all(|s| s.values.iter().all(|v| *v == 0))
    }
}

//! Per-team report

use serde::{Deserialize, Serialize};
use squadify_charts::ChartSeries;
use squadify_gatekeeper::TeamStatus;

/// Everything a renderer needs to redraw one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamReport {
    /// Team (list) name
    pub team: String,

    /// Constraint check outcome
    pub status: TeamStatus,

    /// Average confidence; `None` when nobody reported any, NaN when no
    /// report was a level from 1 to 5
    pub average_confidence: Option<f64>,

    /// Role distribution followed by one chart per field
    pub charts: Vec<ChartSeries>,
}

impl TeamReport {
    /// Whether two reports would render identically
    ///
    /// Unlike `==`, a NaN average equals another NaN average.
    pub fn same_as(&self, other: &TeamReport) -> bool {
        self.team == other.team
            && self.status == other.status
            && self.charts == other.charts
            && self.average_confidence.map(f64::to_bits)
                == other.average_confidence.map(f64::to_bits)
    }

    /// Average confidence formatted to one decimal, `-` when undefined
    pub fn confidence_display(&self) -> String {
        match self.average_confidence {
            Some(average) if !average.is_nan() => format!("{:.1}", average),
            _ => "-".to_string(),
        }
    }
}

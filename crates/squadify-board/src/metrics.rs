//! Metrics collected by an analytics session

use squadify_domain::Severity;
use std::collections::BTreeMap;

/// Counters for session activity
#[derive(Debug, Clone, Default)]
pub struct SessionMetrics {
    /// Times the constraints list was parsed
    pub constraint_reloads: usize,

    /// Team evaluations, by resulting severity
    pub evaluations: BTreeMap<Severity, usize>,

    /// Evaluations whose report differed from the previous one
    pub reports_changed: usize,

    /// Notifications rejected with an error
    pub failures: usize,
}

impl SessionMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a constraints reparse
    pub fn record_reload(&mut self) {
        self.constraint_reloads += 1;
    }

    /// Record a team evaluation
    pub fn record_evaluation(&mut self, severity: Severity, changed: bool) {
        *self.evaluations.entry(severity).or_insert(0) += 1;
        if changed {
            self.reports_changed += 1;
        }
    }

    /// Record a failed notification
    pub fn record_failure(&mut self) {
        self.failures += 1;
    }

    /// Total team evaluations
    pub fn total_evaluations(&self) -> usize {
        self.evaluations.values().sum()
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        self.constraint_reloads = 0;
        self.evaluations.clear();
        self.reports_changed = 0;
        self.failures = 0;
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Session Metrics Summary".to_string(),
            "=======================".to_string(),
            format!("Constraint reloads: {}", self.constraint_reloads),
            format!("Team evaluations: {}", self.total_evaluations()),
            format!("Changed reports: {}", self.reports_changed),
            format!("Failures: {}", self.failures),
        ];

        if !self.evaluations.is_empty() {
            lines.push(String::new());
            lines.push("Evaluations by severity:".to_string());
            for (severity, count) in &self.evaluations {
                lines.push(format!("  {}: {}", severity, count));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = SessionMetrics::new();
        assert_eq!(metrics.constraint_reloads, 0);
        assert_eq!(metrics.total_evaluations(), 0);
        assert_eq!(metrics.reports_changed, 0);
    }

    #[test]
    fn test_record_evaluation() {
        let mut metrics = SessionMetrics::new();
        metrics.record_evaluation(Severity::Violation, true);
        metrics.record_evaluation(Severity::Compliant, false);
        metrics.record_evaluation(Severity::Violation, false);

        assert_eq!(metrics.evaluations[&Severity::Violation], 2);
        assert_eq!(metrics.evaluations[&Severity::Compliant], 1);
        assert_eq!(metrics.total_evaluations(), 3);
        assert_eq!(metrics.reports_changed, 1);
    }

    #[test]
    fn test_reset() {
        let mut metrics = SessionMetrics::new();
        metrics.record_reload();
        metrics.record_failure();
        metrics.record_evaluation(Severity::Concern, true);

        metrics.reset();

        assert_eq!(metrics.constraint_reloads, 0);
        assert_eq!(metrics.failures, 0);
        assert_eq!(metrics.total_evaluations(), 0);
    }

    #[test]
    fn test_summary() {
        let mut metrics = SessionMetrics::new();
        metrics.record_reload();
        metrics.record_evaluation(Severity::Concern, true);

        let summary = metrics.summary();
        assert!(summary.contains("Constraint reloads: 1"));
        assert!(summary.contains("Team evaluations: 1"));
        assert!(summary.contains("  concern: 1"));
    }
}

//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use squadify_board::TeamReport;
use squadify_charts::ChartSeries;
use squadify_domain::{ConstraintSet, Severity};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Whether output is meant for people rather than scripts.
    pub fn is_table(&self) -> bool {
        self.format == OutputFormat::Table
    }

    /// Format the status of several teams.
    pub fn format_reports(&self, reports: &[TeamReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let summaries: Vec<serde_json::Value> = reports.iter().map(summary_json).collect();
                Ok(serde_json::to_string_pretty(&summaries)?)
            }
            OutputFormat::Table => Ok(self.format_reports_table(reports)),
            OutputFormat::Quiet => Ok(reports
                .iter()
                .map(|r| format!("{}\t{}", r.team, r.status.severity))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_reports_table(&self, reports: &[TeamReport]) -> String {
        if reports.is_empty() {
            return self.colorize("No teams found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Team", "Members", "Status", "Confidence", "Notes"]);

        for report in reports {
            builder.push_record([
                report.team.clone(),
                report.status.member_count.to_string(),
                self.severity(report.status.severity),
                report.confidence_display(),
                report.status.messages().join("; "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format one team's detailed report.
    pub fn format_report(&self, report: &TeamReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(report.status.severity.to_string()),
        }
    }

    fn format_report_table(&self, report: &TeamReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["Team".to_string(), report.team.clone()]);
        builder.push_record(["Members".to_string(), report.status.member_count.to_string()]);
        builder.push_record(["Status".to_string(), self.severity(report.status.severity)]);
        builder.push_record(["Colour".to_string(), report.status.status_color.clone()]);
        builder.push_record(["Confidence".to_string(), report.confidence_display()]);

        if let Some(roles) = report.charts.first() {
            let values = roles.series.first().map(|s| s.values.as_slice()).unwrap_or(&[]);
            let distribution: Vec<String> = roles
                .categories
                .iter()
                .zip(values)
                .map(|(role, count)| format!("{}: {}", role, count))
                .collect();
            builder.push_record(["Roles".to_string(), distribution.join(", ")]);
        }

        for violation in &report.status.violations {
            builder.push_record(["Violation".to_string(), self.colorize(&violation.to_string(), "red")]);
        }
        for concern in &report.status.concerns {
            builder.push_record(["Concern".to_string(), self.colorize(&concern.to_string(), "yellow")]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format a constraint set.
    pub fn format_constraints(&self, constraints: &ConstraintSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(constraints)?),
            OutputFormat::Table => Ok(self.format_constraints_table(constraints)),
            OutputFormat::Quiet => {
                let mut lines: Vec<String> = constraints
                    .role_minimums
                    .iter()
                    .map(|(role, count)| format!("{}={}", role, count))
                    .collect();
                for (key, bound) in bounds(constraints) {
                    if let Some(value) = bound {
                        lines.push(format!("{}={}", key, value));
                    }
                }
                Ok(lines.join("\n"))
            }
        }
    }

    fn format_constraints_table(&self, constraints: &ConstraintSet) -> String {
        if constraints.is_empty() {
            return self.colorize("No constraints defined.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Constraint", "Value"]);
        for (role, count) in constraints.role_minimums.iter() {
            builder.push_record([format!("Minimum {}s", role), count.to_string()]);
        }
        builder.push_record(["Team size >".to_string(), format_bound(constraints.team_min_size)]);
        builder.push_record(["Team size <".to_string(), format_bound(constraints.team_max_size)]);
        builder.push_record(["Confidence >".to_string(), format_bound(constraints.min_confidence)]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the charts of several teams.
    pub fn format_charts(&self, reports: &[TeamReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let charts: Vec<serde_json::Value> = reports
                    .iter()
                    .map(|r| serde_json::json!({ "team": r.team, "charts": r.charts }))
                    .collect();
                Ok(serde_json::to_string_pretty(&charts)?)
            }
            OutputFormat::Table => {
                let mut sections = Vec::new();
                for report in reports {
                    sections.push(self.colorize(&report.team, "cyan"));
                    for chart in &report.charts {
                        sections.push(format!("{}\n{}", chart.name, chart_table(chart)));
                    }
                }
                Ok(sections.join("\n\n"))
            }
            OutputFormat::Quiet => Ok(reports
                .iter()
                .flat_map(|r| r.charts.iter().map(move |c| format!("{}\t{}", r.team, c.name)))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Format a severity, coloured by how bad it is.
    pub fn severity(&self, severity: Severity) -> String {
        let color = match severity {
            Severity::Compliant => "green",
            Severity::Concern => "yellow",
            Severity::Violation => "red",
        };
        self.colorize(severity.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn summary_json(report: &TeamReport) -> serde_json::Value {
    serde_json::json!({
        "team": report.team,
        "member_count": report.status.member_count,
        "severity": report.status.severity,
        "status_color": report.status.status_color,
        "average_confidence": report.average_confidence,
        "messages": report.status.messages(),
    })
}

fn bounds(constraints: &ConstraintSet) -> [(&'static str, Option<f64>); 3] {
    [
        ("min_size", constraints.team_min_size),
        ("max_size", constraints.team_max_size),
        ("min_confidence", constraints.min_confidence),
    ]
}

fn format_bound(bound: Option<f64>) -> String {
    bound.map_or_else(|| "-".to_string(), |value| value.to_string())
}

fn chart_table(chart: &ChartSeries) -> String {
    let mut builder = Builder::default();
    builder.push_record(std::iter::once(String::new()).chain(chart.categories.iter().cloned()));
    for series in &chart.series {
        let label = if series.label.is_empty() {
            "count".to_string()
        } else {
            series.label.clone()
        };
        builder.push_record(std::iter::once(label).chain(series.values.iter().map(ToString::to_string)));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

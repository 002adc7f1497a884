//! Check command implementation.

use super::load_session;
use crate::cli::CheckArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use squadify_domain::Severity;

/// Execute the check command.
pub fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_check(&args, config, formatter)?);
    Ok(())
}

fn render_check(args: &CheckArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let (_, _, reports) = load_session(&args.board, config)?;

    let mut output = formatter.format_reports(&reports)?;
    if reports.is_empty() {
        return Ok(output);
    }

    let failing = reports
        .iter()
        .filter(|r| r.status.severity == Severity::Violation)
        .count();
    let summary = if failing == 0 {
        formatter.success(&format!("All {} teams meet the constraints", reports.len()))
    } else {
        formatter.warning(&format!("{} of {} teams violate the constraints", failing, reports.len()))
    };

    // Json and quiet output stay machine-readable
    if formatter.is_table() {
        output.push('\n');
        output.push_str(&summary);
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn board_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const BOARD: &str = r#"{
        "lists": [
            { "name": "Squadification Constraints", "cards": [ { "title": "size > 1" } ] },
            { "name": "Team A", "cards": [ { "title": "Alice", "labels": ["Dev"] } ] },
            { "name": "Team B", "cards": [
                { "title": "Bob", "labels": ["Dev"] },
                { "title": "Cid", "labels": ["Tester"] } ] }
        ]
    }"#;

    #[test]
    fn test_check_table_summary() {
        let file = board_file(BOARD);
        let args = CheckArgs {
            board: file.path().to_str().unwrap().to_string(),
        };
        let formatter = Formatter::new(OutputFormat::Table, false);

        let output = render_check(&args, &Config::default(), &formatter).unwrap();
        assert!(output.contains("Not enough members"));
        assert!(output.ends_with("⚠ 1 of 2 teams violate the constraints"));
    }

    #[test]
    fn test_check_json_has_no_summary() {
        let file = board_file(BOARD);
        let args = CheckArgs {
            board: file.path().to_str().unwrap().to_string(),
        };
        let formatter = Formatter::new(OutputFormat::Json, false);

        let output = render_check(&args, &Config::default(), &formatter).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_check_without_constraints_list() {
        let file = board_file(r#"{"lists": [{"name": "Team A"}]}"#);
        let args = CheckArgs {
            board: file.path().to_str().unwrap().to_string(),
        };
        let formatter = Formatter::new(OutputFormat::Table, false);

        let err = render_check(&args, &Config::default(), &formatter).unwrap_err();
        assert!(err.to_string().contains("Squadification Constraints"));
    }
}

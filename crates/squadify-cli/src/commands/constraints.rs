//! Constraints command implementation.

use crate::cli::ConstraintsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use crate::snapshot::SnapshotFile;
use squadify_gatekeeper::parse_constraints;

/// Execute the constraints command.
pub fn execute_constraints(
    args: ConstraintsArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_constraints(&args, config, formatter)?);
    Ok(())
}

fn render_constraints(
    args: &ConstraintsArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<String> {
    let board = SnapshotFile::new(&args.board).load()?;
    let list = board.constraints_list(&config.engine.constraints_list_name)?;
    formatter.format_constraints(&parse_constraints(list))
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

    fn args(file: &NamedTempFile) -> ConstraintsArgs {
        ConstraintsArgs {
            board: file.path().to_str().unwrap().to_string(),
        }
    }

    #[test]
    fn test_constraints_quiet() {
        let file = board_file(
            r#"{ "lists": [ { "name": "Rules", "cards": [
                { "title": "Tester", "labels": ["Tester"] },
                { "title": "size < 8" } ] } ] }"#,
        );
        let mut config = Config::default();
        config.set_constraints_list("Rules".to_string()).unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let output = render_constraints(&args(&file), &config, &formatter).unwrap();
        assert_eq!(output, "Tester=1\nmax_size=8");
    }

    #[test]
    fn test_missing_constraints_list() {
        let file = board_file(r#"{ "lists": [ { "name": "Team A" } ] }"#);
        let formatter = Formatter::new(OutputFormat::Table, false);

        let err = render_constraints(&args(&file), &Config::default(), &formatter).unwrap_err();
        assert!(err.to_string().contains("Squadification Constraints"));
    }
}

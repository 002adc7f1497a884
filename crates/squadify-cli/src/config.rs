//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use squadify_gatekeeper::GatekeeperConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Engine settings: constraints list name, confidence field, colours
    #[serde(default)]
    pub engine: GatekeeperConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".squadify").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.engine.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Use a different constraints list name.
    pub fn set_constraints_list(&mut self, name: String) -> Result<()> {
        let previous = std::mem::replace(&mut self.engine.constraints_list_name, name);
        if let Err(e) = self.engine.validate() {
            self.engine.constraints_list_name = previous;
            return Err(e.into());
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.engine.constraints_list_name, "Squadification Constraints");
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.format = OutputFormat::Json;
        config.settings.color = false;
        config.engine.status_colors.invalid = "#ff0000".to_string();

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [engine]
            constraints_list_name = "Team Rules"

            [settings]
            format = "quiet"
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.engine.constraints_list_name, "Team Rules");
        assert_eq!(config.engine.confidence_field, "Confidence");
        assert_eq!(config.settings.format, OutputFormat::Quiet);
        assert!(config.settings.color);
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        fs::write(&path, "[settings]\nformat = \"fancy\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Toml(_))));

        fs::write(&path, "[engine]\nconstraints_list_name = \"\"\n").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CliError::Gatekeeper(_))));

        assert!(matches!(
            Config::load_from(&dir.path().join("missing.toml")),
            Err(CliError::Io(_))
        ));
    }

    #[test]
    fn test_set_constraints_list() {
        let mut config = Config::default();
        config.set_constraints_list("Rules".to_string()).unwrap();
        assert_eq!(config.engine.constraints_list_name, "Rules");

        assert!(config.set_constraints_list("*Rules".to_string()).is_err());
        assert_eq!(config.engine.constraints_list_name, "Rules");
    }
}

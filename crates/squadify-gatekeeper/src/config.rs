//! Gatekeeper configuration

use crate::GatekeeperError;
use serde::{Deserialize, Serialize};
use squadify_domain::{Severity, CONFIDENCE_FIELD, DEFAULT_CONSTRAINTS_LIST_NAME};

/// Colours used to paint a team's status area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusColors {
    /// All constraints met, nothing to flag
    pub valid: String,

    /// Constraints met, but the team has concerns
    pub concern: String,

    /// At least one constraint violated
    pub invalid: String,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            valid: "#86b623".to_string(),
            concern: "#bb9922".to_string(),
            invalid: "#cc4400".to_string(),
        }
    }
}

impl StatusColors {
    /// Colour for a severity
    pub fn for_severity(&self, severity: Severity) -> &str {
        match severity {
            Severity::Compliant => &self.valid,
            Severity::Concern => &self.concern,
            Severity::Violation => &self.invalid,
        }
    }
}

/// Configuration for team checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatekeeperConfig {
    /// Name of the list holding the constraint cards
    pub constraints_list_name: String,

    /// Field carrying self-reported confidence
    pub confidence_field: String,

    /// Status area colours
    pub status_colors: StatusColors,
}

impl Default for GatekeeperConfig {
    fn default() -> Self {
        Self {
            constraints_list_name: DEFAULT_CONSTRAINTS_LIST_NAME.to_string(),
            confidence_field: CONFIDENCE_FIELD.to_string(),
            status_colors: StatusColors::default(),
        }
    }
}

impl GatekeeperConfig {
    /// Default settings with a colour-blind friendly palette
    pub fn high_contrast() -> Self {
        Self {
            status_colors: StatusColors {
                valid: "#1a85ff".to_string(),
                concern: "#ffc20a".to_string(),
                invalid: "#d41159".to_string(),
            },
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GatekeeperError> {
        if self.constraints_list_name.trim().is_empty() {
            return Err(GatekeeperError::Config(
                "constraints_list_name must not be empty".to_string(),
            ));
        }
        if self.constraints_list_name.contains(squadify_domain::WILDCARD_MARKER) {
            return Err(GatekeeperError::Config(
                "constraints_list_name must not contain '*'".to_string(),
            ));
        }
        if self.confidence_field.trim().is_empty() {
            return Err(GatekeeperError::Config(
                "confidence_field must not be empty".to_string(),
            ));
        }
        let colors = &self.status_colors;
        if [&colors.valid, &colors.concern, &colors.invalid]
            .iter()
            .any(|c| c.trim().is_empty())
        {
            return Err(GatekeeperError::Config(
                "status colours must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GatekeeperError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| GatekeeperError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GatekeeperError> {
        toml::to_string_pretty(self)
            .map_err(|e| GatekeeperError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

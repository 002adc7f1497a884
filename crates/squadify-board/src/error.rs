//! Error types for board and session operations

use serde_json::error::Category;
use squadify_extractor::ExtractorError;
use squadify_gatekeeper::GatekeeperError;
use thiserror::Error;

/// Errors that can occur while loading a board or evaluating teams
#[derive(Error, Debug)]
pub enum BoardError {
    /// A required snapshot is missing or has the wrong shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A list the operation must locate is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// The snapshot is not valid JSON
    #[error("JSON parse error: {0}")]
    Json(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for BoardError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            Category::Data => BoardError::InvalidArgument(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => BoardError::Json(e.to_string()),
        }
    }
}

impl From<ExtractorError> for BoardError {
    fn from(e: ExtractorError) -> Self {
        match e {
            ExtractorError::InvalidArgument(msg) => BoardError::InvalidArgument(msg),
            ExtractorError::JsonParse(msg) => BoardError::Json(msg),
        }
    }
}

impl From<GatekeeperError> for BoardError {
    fn from(e: GatekeeperError) -> Self {
        match e {
            GatekeeperError::InvalidArgument(msg) => BoardError::InvalidArgument(msg),
            GatekeeperError::NotFound(msg) => BoardError::NotFound(msg),
            GatekeeperError::Config(msg) => BoardError::Config(msg),
        }
    }
}

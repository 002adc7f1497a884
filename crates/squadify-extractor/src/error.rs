//! Error types for the Extractor

use serde_json::error::Category;
use thiserror::Error;

/// Errors that can occur while reading a team snapshot
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The snapshot is missing or has the wrong shape
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The snapshot is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl From<serde_json::Error> for ExtractorError {
    fn from(e: serde_json::Error) -> Self {
        match e.classify() {
            // Well-formed JSON that does not match the snapshot shape
            Category::Data => ExtractorError::InvalidArgument(e.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                ExtractorError::JsonParse(e.to_string())
            }
        }
    }
}

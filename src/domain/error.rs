use std::io;

use thiserror::Error;

use crate::domain::RoleError;

/// Library-wide error type for panel-roles operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Role definition or catalog is invalid.
    #[error(transparent)]
    Role(#[from] RoleError),

    /// Requested role does not exist in the catalog.
    #[error("Role '{0}' not found")]
    RoleNotFound(String),

    /// Configured path points outside the site root.
    #[error("Path escapes the site root: {0}")]
    PathTraversal(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON encoding error.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }
}

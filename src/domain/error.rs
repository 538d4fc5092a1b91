use std::io;

use thiserror::Error;

/// Library-wide error type for stroll-story operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue (missing credential, bad client setup).
    #[error("{0}")]
    Configuration(String),

    /// Configuration file contains an invalid value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Presentation parameter outside its enumerated set.
    #[error("Invalid {kind} '{value}': must be one of {allowed}")]
    InvalidParameter { kind: &'static str, value: String, allowed: String },

    /// Track input missing or malformed.
    #[error("Failed to parse track input {path}: {reason}")]
    Parse { path: String, reason: String },

    /// Generation backend failed or answered with an unexpected shape.
    ///
    /// `status` is the HTTP status when a response arrived. `retry_after_ms`
    /// carries the server's Retry-After hint and is never shown to users.
    #[error("Generation failed: {message}")]
    Generation { message: String, status: Option<u16>, retry_after_ms: Option<u64> },

    /// Map document cannot receive the generated content.
    #[error("Failed to assemble output document: {0}")]
    Assembly(String),

    /// Template rendering failed.
    #[error("Failed to render template {template}: {reason}")]
    Template { template: String, reason: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(path: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Parse { path: path.into(), reason: reason.into() }
    }

    pub fn generation_error<S: Into<String>>(message: S) -> Self {
        AppError::Generation { message: message.into(), status: None, retry_after_ms: None }
    }

    /// Generation failure tied to an HTTP response status.
    pub fn generation_status<S: Into<String>>(message: S, status: u16) -> Self {
        AppError::Generation { message: message.into(), status: Some(status), retry_after_ms: None }
    }

    /// Pipeline stage the error belongs to, for the termination message.
    pub fn stage(&self) -> &'static str {
        match self {
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidParameter { .. }
            | AppError::TomlParse(_) => "configuration",
            AppError::Parse { .. } => "input",
            AppError::Generation { .. } => "generation",
            AppError::Assembly(_) | AppError::Template { .. } => "assembly",
            AppError::Io(_) => "output",
        }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting it.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::InvalidParameter { .. }
            | AppError::Parse { .. }
            | AppError::Template { .. }
            | AppError::TomlParse(_) => io::ErrorKind::InvalidInput,
            AppError::Assembly(_) => io::ErrorKind::InvalidData,
            AppError::Generation { .. } => io::ErrorKind::Other,
        }
    }
}

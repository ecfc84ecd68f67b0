//! Error types for skywalker-core

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias using skywalker Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for skywalker
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(skywalker::config))]
    Config(String),

    #[error("Database error: {0}")]
    #[diagnostic(code(skywalker::database))]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    #[diagnostic(code(skywalker::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(skywalker::serde))]
    Serde(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    #[diagnostic(code(skywalker::toml))]
    Toml(#[from] toml::de::Error),

    /// Transport-level failure: network unreachable, non-success status,
    /// or an API payload that is not even valid provider JSON.
    #[error("Provider error: {0}")]
    #[diagnostic(code(skywalker::provider))]
    Provider(String),

    /// The model answered, but its text did not match the requested
    /// response schema. Kept separate from `Provider` so callers can tell
    /// "service unreachable" from "service returned an unexpected shape".
    #[error("Response decode error: {0}")]
    #[diagnostic(code(skywalker::decode))]
    Decode(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Provider(err.to_string())
    }
}

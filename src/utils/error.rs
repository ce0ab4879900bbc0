//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! The metric deriver and chain aggregator are total functions and have
//! no error type of their own.

use thiserror::Error;

/// Errors that can occur while talking to the statistics API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Endpoint not found: {0}")]
    NotFound(String),
}

/// Errors that can occur while decoding statistics payloads
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while loading protocol parameters
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid protocol parameters: {0}")]
    Invalid(String),
}

/// Errors that can occur during chart generation
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chain distribution is empty")]
    EmptyDistribution,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

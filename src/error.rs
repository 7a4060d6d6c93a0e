//! Error types for the fallible edges of the crate.
//!
//! The state machine itself never fails: events that do not apply to the
//! current phase are ignored. Errors only arise when building values from
//! untrusted input (card values, event names, configuration files).

use std::path::PathBuf;

/// Errors produced by `high_low`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("card value {0} is outside 1..=10")]
    InvalidCardValue(u8),

    #[error("scripted value source needs at least one value")]
    EmptyScript,

    #[error("unknown event '{0}' (expected start, higher, lower or again)")]
    UnknownEvent(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    ConfigValidation(String),
}

/// Result alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum OriginListError {
    /// Hostname is empty or not a syntactically valid host
    #[error("Invalid hostname: {0}")]
    InvalidHostname(String),

    /// The base domain resolver could not produce a base domain
    #[error("Base domain unavailable for {hostname}: {reason}")]
    BaseDomainUnavailable { hostname: String, reason: String },

    /// Configuration could not be read or is invalid
    #[error("Config error: {0}")]
    Config(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl OriginListError {
    /// Whether it is expected behavior (bad user input, unknown host), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidHostname(_) | Self::Config(_) => true,
            Self::BaseDomainUnavailable { .. } | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for OriginListError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type OriginListResult<T> = std::result::Result<T, OriginListError>;

//! Error types for the access-control engine

use thiserror::Error;

/// Access-control engine errors
///
/// These surface configuration and infrastructure defects only. An
/// authorization denial is never an error; the engine models it as a
/// plain `false`.
#[derive(Debug, Error)]
pub enum AceError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid handler/ACE configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Entity resolver failure (storage/transport)
    #[error("Resolver error: {0}")]
    Resolver(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for access-control operations
pub type Result<T> = std::result::Result<T, AceError>;

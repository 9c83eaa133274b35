//! Error types for comic-export
//!
//! A single structured error enum covers the whole pipeline: configuration,
//! network transport, remote API status failures, CSV persistence, and the
//! fatal character-resolution path.

use thiserror::Error;

/// Result type alias for comic-export operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for comic-export
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "PUBLIC_KEY")
        key: Option<String>,
    },

    /// Network transport error (DNS, connect, timeout, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The catalog API answered with a non-success HTTP status
    #[error("catalog API returned HTTP {status} from {endpoint}")]
    Api {
        /// HTTP status code returned by the remote gateway
        status: u16,
        /// The endpoint that produced the status (e.g., "characters", "comics")
        endpoint: String,
    },

    /// Character name resolved to an empty result set — fatal to the run
    #[error("character not found: {0}")]
    CharacterNotFound(String),

    /// CSV serialization or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

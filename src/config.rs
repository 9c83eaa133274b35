//! Configuration types for comic-export

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the public API key
pub const PUBLIC_KEY_VAR: &str = "PUBLIC_KEY";
/// Environment variable holding the private API key
pub const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// API credentials: a public identifier and a private signing secret.
///
/// Loaded once at startup and passed explicitly into the components that
/// need them — never ambient global state. The private key is redacted
/// from `Debug` output so it cannot leak into logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Public API key, sent as the `apikey` query parameter
    pub public_key: String,
    /// Private key, only ever fed into the request digest
    pub private_key: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Load credentials from `PUBLIC_KEY` and `PRIVATE_KEY` environment variables
    ///
    /// # Errors
    /// Returns a configuration error naming the missing variable.
    pub fn from_env() -> Result<Self> {
        let public_key = require_env(PUBLIC_KEY_VAR)?;
        let private_key = require_env(PRIVATE_KEY_VAR)?;
        Ok(Self {
            public_key,
            private_key,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| Error::Config {
        message: format!("{key} is not set"),
        key: Some(key.to_string()),
    })
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Retry configuration for transient page-fetch failures
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (default: 3)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial delay before first retry (default: 1 second)
    #[serde(default = "default_initial_delay", with = "duration_serde")]
    pub initial_delay: Duration,

    /// Maximum delay between retries (default: 30 seconds)
    #[serde(default = "default_max_delay", with = "duration_serde")]
    pub max_delay: Duration,

    /// Multiplier for exponential backoff (default: 2.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: true)
    #[serde(default = "default_true")]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

/// Main configuration for the export pipeline
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the comics catalog gateway (default: the public Marvel gateway)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Output CSV path (default: "comics.csv" in the working directory)
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Number of comics requested per page (default: 100, the gateway maximum)
    #[serde(default = "default_page_limit")]
    pub page_limit: u32,

    /// Per-request HTTP timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,

    /// Retry configuration for transient page-fetch failures
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            output_path: default_output_path(),
            page_limit: default_page_limit(),
            request_timeout: default_request_timeout(),
            retry: RetryConfig::default(),
        }
    }
}

fn default_base_url() -> String {
    "https://gateway.marvel.com/v1/public".to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from("comics.csv")
}

fn default_page_limit() -> u32 {
    100
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_delay() -> Duration {
    Duration::from_secs(1)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(30)
}

fn default_backoff_multiplier() -> f64 {
    2.0
}

fn default_true() -> bool {
    true
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

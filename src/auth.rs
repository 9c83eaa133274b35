//! Request signing for the comics gateway.
//!
//! The gateway authenticates read requests with a per-request timestamp and
//! an MD5 digest of `timestamp + private_key + public_key`, sent alongside
//! the public key as query parameters. The private key itself never goes
//! over the wire.

use crate::config::Credentials;

/// Transient per-request authentication token.
///
/// Computed fresh immediately before each outbound request so the timestamp
/// stays within the gateway's freshness tolerance; never reused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthToken {
    /// Milliseconds since the Unix epoch at signing time
    pub ts: i64,
    /// Lowercase hex MD5 of `ts + private_key + public_key`
    pub hash: String,
}

/// Signs outbound requests with the shared credentials.
#[derive(Clone, Debug)]
pub struct Signer {
    credentials: Credentials,
}

impl Signer {
    /// Create a signer holding the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// The public key, exposed for the `apikey` query parameter
    pub fn public_key(&self) -> &str {
        &self.credentials.public_key
    }

    /// Produce a fresh token for the current instant
    pub fn sign(&self) -> AuthToken {
        self.sign_at(chrono::Utc::now().timestamp_millis())
    }

    // Digest input is the exact concatenation ts || private || public.
    fn sign_at(&self, ts: i64) -> AuthToken {
        let digest = md5::compute(format!(
            "{ts}{}{}",
            self.credentials.private_key, self.credentials.public_key
        ));
        AuthToken {
            ts,
            hash: format!("{digest:x}"),
        }
    }
}

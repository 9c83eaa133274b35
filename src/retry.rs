//! Retry logic with exponential backoff for transient page-fetch failures.
//!
//! The original pipeline left pagination state stale after a failed page,
//! which could spin on the same offset forever. The policy here is
//! explicit: retry the failed fetch with bounded exponential backoff (plus
//! optional jitter), and abort the run once the attempt budget is spent.

use crate::config::RetryConfig;
use crate::error::Error;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Trait for errors that can be classified as retryable or not
///
/// Transient failures (timeouts, connection errors, gateway 5xx, rate
/// limiting) should return `true`. Permanent failures (bad credentials,
/// malformed bodies, local I/O) should return `false`.
pub trait IsRetryable {
    /// Returns true if the error is transient and the operation should be retried
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for Error {
    fn is_retryable(&self) -> bool {
        match self {
            Error::Network(e) => e.is_timeout() || e.is_connect(),
            // 429 is rate limiting, 5xx is a gateway-side fault
            Error::Api { status, .. } => *status == 429 || (500..=599).contains(status),
            Error::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut
                    | std::io::ErrorKind::ConnectionRefused
                    | std::io::ErrorKind::ConnectionReset
                    | std::io::ErrorKind::ConnectionAborted
                    | std::io::ErrorKind::BrokenPipe
                    | std::io::ErrorKind::Interrupted
            ),
            // Config, resolution, CSV, and body-shape errors are permanent
            Error::Config { .. }
            | Error::CharacterNotFound(_)
            | Error::Csv(_)
            | Error::Serialization(_) => false,
        }
    }
}

/// Execute an async operation with exponential backoff retry logic
///
/// Returns the successful result, or the last error once the error is
/// non-retryable or all attempts are exhausted.
pub async fn fetch_with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: IsRetryable + std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay;

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    tracing::info!(attempts = attempt + 1, "operation succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if e.is_retryable() && attempt < config.max_attempts => {
                attempt += 1;

                tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis(),
                    "operation failed, retrying"
                );

                let jittered_delay = if config.jitter { add_jitter(delay) } else { delay };
                tokio::time::sleep(jittered_delay).await;

                let next_delay =
                    Duration::from_secs_f64(delay.as_secs_f64() * config.backoff_multiplier);
                delay = next_delay.min(config.max_delay);
            }
            Err(e) => {
                if e.is_retryable() {
                    tracing::error!(
                        error = %e,
                        attempts = attempt + 1,
                        "operation failed after all retry attempts exhausted"
                    );
                } else {
                    tracing::error!(error = %e, "operation failed with non-retryable error");
                }
                return Err(e);
            }
        }
    }
}

// Jitter is uniformly distributed between 0% and 100% of the delay, so the
// actual delay lands between `delay` and `2 * delay`.
fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter_factor: f64 = rng.gen_range(0.0..=1.0);
    Duration::from_secs_f64(delay.as_secs_f64() * (1.0 + jitter_factor))
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Debug)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl std::fmt::Display for TestError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                TestError::Transient => write!(f, "transient error"),
                TestError::Permanent => write!(f, "permanent error"),
            }
        }
    }

    impl IsRetryable for TestError {
        fn is_retryable(&self) -> bool {
            matches!(self, TestError::Transient)
        }
    }

    fn fast_config(max_attempts: u32) -> RetryConfig {
        RetryConfig {
            max_attempts,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_secs(1),
            backoff_multiplier: 2.0,
            jitter: false,
        }
    }

    #[tokio::test]
    async fn success_does_not_retry() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(3), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok::<_, TestError>(42)
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(counter.load(Ordering::SeqCst), 1, "should only call once");
    }

    #[tokio::test]
    async fn transient_failure_recovers_within_budget() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(3), || {
            let counter = counter_clone.clone();
            async move {
                let count = counter.fetch_add(1, Ordering::SeqCst);
                if count < 2 {
                    Err(TestError::Transient)
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(
            counter.load(Ordering::SeqCst),
            3,
            "should retry twice before success"
        );
    }

    #[tokio::test]
    async fn exhausted_budget_returns_last_error() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(2), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Transient)
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(
            counter.load(Ordering::SeqCst),
            3,
            "should try initial + 2 retries"
        );
    }

    #[tokio::test]
    async fn permanent_error_fails_immediately() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let result = fetch_with_retry(&fast_config(3), || {
            let counter = counter_clone.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Err::<i32, _>(TestError::Permanent)
            }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(
            counter.load(Ordering::SeqCst),
            1,
            "should not retry permanent error"
        );
    }

    #[test]
    fn add_jitter_stays_within_bounds() {
        let delay = Duration::from_millis(50);
        for i in 0..200 {
            let jittered = add_jitter(delay);
            assert!(
                jittered >= delay && jittered <= delay * 2,
                "iteration {i}: jittered {jittered:?} outside [delay, 2*delay]"
            );
        }
    }

    // -----------------------------------------------------------------------
    // IsRetryable classification for the crate's Error type
    // -----------------------------------------------------------------------

    #[test]
    fn api_rate_limit_and_server_errors_are_retryable() {
        for status in [429, 500, 502, 503] {
            let err = Error::Api {
                status,
                endpoint: "comics".to_string(),
            };
            assert!(err.is_retryable(), "HTTP {status} should be retryable");
        }
    }

    #[test]
    fn api_client_errors_are_not_retryable() {
        for status in [401, 404, 409] {
            let err = Error::Api {
                status,
                endpoint: "comics".to_string(),
            };
            assert!(!err.is_retryable(), "HTTP {status} should be permanent");
        }
    }

    #[test]
    fn character_not_found_is_not_retryable() {
        assert!(!Error::CharacterNotFound("Thor".to_string()).is_retryable());
    }

    #[test]
    fn config_and_csv_errors_are_not_retryable() {
        let config = Error::Config {
            message: "bad".to_string(),
            key: None,
        };
        assert!(!config.is_retryable());

        let serialization =
            Error::Serialization(serde_json::from_str::<String>("bad json").unwrap_err());
        assert!(!serialization.is_retryable());
    }

    #[test]
    fn io_timeout_is_retryable_but_not_found_is_not() {
        let timeout = Error::Io(std::io::Error::new(std::io::ErrorKind::TimedOut, "timeout"));
        assert!(timeout.is_retryable());

        let not_found = Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "not found",
        ));
        assert!(!not_found.is_retryable());
    }
}

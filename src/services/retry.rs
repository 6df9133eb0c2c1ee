use std::{fmt::Display, future::Future, time::Duration};

use tracing::{debug, warn};

/// Fixed-delay retry settings. No backoff growth, no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Run `operation` until it succeeds or `policy.max_attempts` is reached.
///
/// Every failure is treated the same. Between attempts the task sleeps for
/// `policy.delay`; the error of the final attempt is returned unchanged.
pub async fn with_retry<Op, Fut, T, E>(policy: &RetryPolicy, mut operation: Op) -> Result<T, E>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max = policy.max_attempts.max(1);
    let mut attempt: u32 = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max => {
                debug!(attempt, "Retries exhausted");
                return Err(err);
            }
            Err(err) => {
                warn!(
                    attempt,
                    delay_ms = policy.delay.as_millis() as u64,
                    error = %err,
                    "Attempt failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

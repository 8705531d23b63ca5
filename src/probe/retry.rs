//! Bounded retry control around the probe executor.
//!
//! # Design Decisions
//! - Explicit loop with a mutable attempts-remaining counter, so termination
//!   is obvious and the call stack stays flat
//! - Fixed small backoff (default 1000 ms): the retried failure modes are
//!   brief network blips, not overload that would warrant exponential growth
//! - Backoff waits are cooperative sleeps; dropping the invocation future
//!   cancels the whole loop, backoff included
//! - Each attempt draws a fresh fingerprint

use std::time::Duration;

use crate::config::{ProbeConfig, RetryConfig};
use crate::monitor::MonitorError;
use crate::probe::executor::ProbeExecutor;
use crate::probe::fingerprint;
use crate::probe::result::ProbeResult;

/// Resolved retry parameters for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, first try included. Clamped to at least 1.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub backoff: Duration,
    /// Per-attempt deadline.
    pub timeout: Duration,
}

impl RetryPolicy {
    pub fn from_config(retries: &RetryConfig, probe: &ProbeConfig) -> Self {
        Self {
            max_attempts: retries.max_attempts.max(1),
            backoff: Duration::from_millis(retries.backoff_ms),
            timeout: Duration::from_millis(probe.timeout_ms),
        }
    }
}

/// Probe with retries until success, a non-retryable failure, or an
/// exhausted budget. The last failing result is returned unmodified; a
/// success short-circuits without consuming remaining budget.
pub async fn run_with_retries(
    executor: &ProbeExecutor,
    url: &str,
    policy: &RetryPolicy,
) -> Result<ProbeResult, MonitorError> {
    let mut remaining = policy.max_attempts;

    loop {
        remaining -= 1;
        let fingerprint = fingerprint::generate();
        let result = executor.execute(url, &fingerprint, policy.timeout).await?;

        if result.success || !result.is_retryable() || remaining == 0 {
            return Ok(result);
        }

        tracing::info!(
            url = %url,
            error = result.error.as_deref().unwrap_or(""),
            attempts_left = remaining,
            backoff_ms = policy.backoff.as_millis() as u64,
            "probe attempt failed, retrying"
        );
        tokio::time::sleep(policy.backoff).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_clamps_to_one_attempt() {
        let retries = RetryConfig {
            max_attempts: 0,
            backoff_ms: 10,
        };
        let probe = ProbeConfig { timeout_ms: 100 };
        let policy = RetryPolicy::from_config(&retries, &probe);
        assert_eq!(policy.max_attempts, 1);
    }
}

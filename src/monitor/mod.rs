//! Check orchestration.
//!
//! # Data Flow
//! ```text
//! Trigger invocation:
//!     sampler gate ── skip ──▶ Skipped summary (nothing logged or notified)
//!         │ run
//!         ▼
//!     retry controller → probe executor (fresh fingerprint per attempt)
//!         ▼
//!     result log: evict stale entries, then append
//!         ▼
//!     notifier (best effort) → Completed summary
//! ```
//!
//! # Design Decisions
//! - Probe failures are ordinary data and flow back as `CheckOutcome`;
//!   only faults in the monitor's own machinery become `MonitorError`,
//!   so operators can tell "target is down" from "checker is broken"
//! - One logical probe per invocation; overlapping invocations are
//!   tolerated and serialize only on the result log's mutex

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::config::MonitorConfig;
use crate::history::ResultLog;
use crate::notify::{self, Notifier};
use crate::observability::metrics;
use crate::probe::{run_with_retries, ProbeExecutor, ProbeResult, RetryPolicy};
use crate::sampler;

/// Infrastructure fault inside the monitor itself, distinct from the
/// monitored target being unhealthy.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid request header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

/// What one trigger invocation produced.
#[derive(Debug)]
pub enum CheckOutcome {
    /// The sampler gated this invocation off; no probe ran.
    Skipped { timestamp: DateTime<Utc> },
    /// A probe ran (possibly with retries) and was logged.
    Completed {
        result: ProbeResult,
        /// Log size after eviction and append.
        logs_count: usize,
    },
}

/// The invocation-driven core: gate, probe, log, notify.
pub struct Monitor {
    config: MonitorConfig,
    executor: ProbeExecutor,
    log: ResultLog,
    notifier: Arc<dyn Notifier>,
}

impl Monitor {
    pub fn new(config: MonitorConfig) -> Result<Self, MonitorError> {
        let executor = ProbeExecutor::new()?;
        let notifier = notify::from_config(&config.notifier)?;
        Ok(Self {
            config,
            executor,
            log: ResultLog::new(),
            notifier,
        })
    }

    /// Run one triggered check end to end.
    pub async fn check(&self) -> Result<CheckOutcome, MonitorError> {
        if !sampler::should_run(self.config.sampler.run_probability) {
            tracing::debug!("check skipped by run sampler");
            metrics::record_skip();
            return Ok(CheckOutcome::Skipped {
                timestamp: Utc::now(),
            });
        }

        let url = &self.config.target.url;
        let policy = RetryPolicy::from_config(&self.config.retries, &self.config.probe);
        let result = run_with_retries(&self.executor, url, &policy).await?;

        let max_age = std::time::Duration::from_secs(self.config.retention.max_age_secs);
        let evicted = self.log.evict_older_than(max_age);
        if evicted > 0 {
            tracing::debug!(evicted, "dropped expired log entries");
        }
        self.log.append(result.clone());
        let logs_count = self.log.len();

        if result.success {
            tracing::info!(
                url = %url,
                status = result.status_code.unwrap_or_default(),
                response_time_ms = result.response_time_ms,
                logs_count,
                "check passed"
            );
        } else {
            tracing::warn!(
                url = %url,
                error = result.error.as_deref().unwrap_or(""),
                response_time_ms = result.response_time_ms,
                logs_count,
                "check failed"
            );
        }
        metrics::record_check(&result);
        metrics::record_log_size(logs_count);

        // best effort; the notifier swallows its own failures and its
        // client timeout bounds the wait
        self.notifier.notify(&result).await;

        Ok(CheckOutcome::Completed { result, logs_count })
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Current log size, post-hoc view for the status surface.
    pub fn logs_count(&self) -> usize {
        self.log.len()
    }
}

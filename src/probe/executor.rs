//! Single-attempt probe execution.
//!
//! # Responsibilities
//! - Build request headers from a fingerprint plus no-cache directives
//! - Issue one GET bound to a deadline
//! - Classify the outcome (2xx, HTTP error, transport failure, timeout)
//! - Measure elapsed time on every path
//!
//! # Design Decisions
//! - The deadline is enforced with `tokio::time::timeout`; when it fires the
//!   request future is dropped, which aborts the in-flight connection rather
//!   than letting it linger
//! - A timeout is classified separately from generic transport failures,
//!   though both surface as `success: false` without a status code
//! - No retry here; that is the retry controller's job

use std::error::Error as _;
use std::time::{Duration, Instant};

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, PRAGMA, REFERER, USER_AGENT,
};
use tokio::time;

use crate::monitor::MonitorError;
use crate::probe::fingerprint::Fingerprint;
use crate::probe::result::ProbeResult;

/// Issues individual timed probe attempts against the target.
pub struct ProbeExecutor {
    client: reqwest::Client,
}

impl ProbeExecutor {
    /// Build an executor with its own connection pool.
    ///
    /// The client carries no default timeout; the per-attempt deadline is
    /// applied in [`execute`](Self::execute) so a cancelled attempt is
    /// abandoned, not merely ignored.
    pub fn new() -> Result<Self, MonitorError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// One attempt: GET the URL with the given fingerprint, bound to
    /// `deadline`. Target-health failures come back as a [`ProbeResult`];
    /// only faults in the executor itself (header construction, client
    /// internals) escalate as [`MonitorError`].
    pub async fn execute(
        &self,
        url: &str,
        fingerprint: &Fingerprint,
        deadline: Duration,
    ) -> Result<ProbeResult, MonitorError> {
        let headers = build_headers(fingerprint)?;

        let start = Instant::now();
        let outcome = time::timeout(deadline, self.client.get(url).headers(headers).send()).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let result = match outcome {
            Ok(Ok(response)) => {
                let status = response.status();
                if status.is_success() {
                    ProbeResult::passed(url, status.as_u16(), elapsed_ms)
                } else {
                    let reason = status.canonical_reason().unwrap_or("Unknown Status");
                    ProbeResult::http_error(url, status.as_u16(), reason, elapsed_ms)
                }
            }
            Ok(Err(e)) => ProbeResult::unreachable(url, describe_transport_error(&e), elapsed_ms),
            Err(_) => ProbeResult::timed_out(url, deadline, elapsed_ms),
        };

        Ok(result)
    }
}

fn build_headers(fingerprint: &Fingerprint) -> Result<HeaderMap, MonitorError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(fingerprint.user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_str(fingerprint.accept)?);
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_str(fingerprint.accept_language)?,
    );
    // the probe must observe the target's live behavior, not a cache's
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    if let Some(referer) = fingerprint.referer {
        headers.insert(REFERER, HeaderValue::from_str(referer)?);
    }
    Ok(headers)
}

/// Flatten a reqwest error and its cause chain into one human-readable line.
/// The top-level error alone often reads "error sending request" with the
/// interesting part (DNS, refused connection) buried in the sources.
fn describe_transport_error(error: &reqwest::Error) -> String {
    let mut description = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !description.contains(&cause_text) {
            description.push_str(": ");
            description.push_str(&cause_text);
        }
        source = cause.source();
    }
    description
}

//! Probe outcome model.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The classified outcome of one check (after retries, one per executed
/// invocation; inside the retry loop, one per attempt).
///
/// Invariants, upheld by the constructors:
/// - `success == true` implies `status_code` is a 2xx and `error` is `None`
/// - `success == false` implies `error` is `Some`
/// - a failing result carries `status_code` only when a complete HTTP
///   exchange occurred (a non-2xx response)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeResult {
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub url: String,
}

impl ProbeResult {
    /// A completed exchange with a 2xx status.
    pub fn passed(url: &str, status_code: u16, response_time_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            success: true,
            status_code: Some(status_code),
            response_time_ms,
            error: None,
            url: url.to_string(),
        }
    }

    /// A completed exchange with a non-2xx status. Authoritative: the target
    /// answered, so this failure is not retried.
    pub fn http_error(url: &str, status_code: u16, reason: &str, response_time_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            success: false,
            status_code: Some(status_code),
            response_time_ms,
            error: Some(format!("HTTP {}: {}", status_code, reason)),
            url: url.to_string(),
        }
    }

    /// A transport-level failure (DNS, connection refused, TLS, ...).
    pub fn unreachable(url: &str, description: String, response_time_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            success: false,
            status_code: None,
            response_time_ms,
            error: Some(description),
            url: url.to_string(),
        }
    }

    /// The per-attempt deadline elapsed before response headers arrived.
    pub fn timed_out(url: &str, deadline: Duration, response_time_ms: u64) -> Self {
        Self {
            timestamp: Utc::now(),
            success: false,
            status_code: None,
            response_time_ms,
            error: Some(format!(
                "timed out after {}ms waiting for response",
                deadline.as_millis()
            )),
            url: url.to_string(),
        }
    }

    /// Whether the failure is transient and worth another attempt.
    ///
    /// Transport failures and timeouts carry no status code; any received
    /// HTTP response (even 5xx) is treated as authoritative and never
    /// retried.
    pub fn is_retryable(&self) -> bool {
        !self.success && self.status_code.is_none()
    }
}

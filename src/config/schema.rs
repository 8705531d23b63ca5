//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the availability monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Listener configuration for the trigger interface.
    pub listener: ListenerConfig,

    /// The monitored target.
    pub target: TargetConfig,

    /// Per-attempt probe settings.
    pub probe: ProbeConfig,

    /// Retry policy for transient probe failures.
    pub retries: RetryConfig,

    /// Result log retention.
    pub retention: RetentionConfig,

    /// Probabilistic run gate.
    pub sampler: SamplerConfig,

    /// Optional notification sink.
    pub notifier: NotifierConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Total request deadline for a trigger invocation in seconds.
    /// Must cover the worst case of the probe budget
    /// (max_attempts × timeout + backoffs).
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 120,
        }
    }
}

/// The single monitored target.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// URL probed on every executed check. Fixed at startup; the trigger
    /// interface takes no parameters.
    pub url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: "https://www.example.com/".to_string(),
        }
    }
}

/// Per-attempt probe settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Deadline for a single attempt in milliseconds. If response headers
    /// have not arrived by then, the attempt is cancelled and classified as
    /// a timeout.
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { timeout_ms: 30_000 }
    }
}

/// Retry policy configuration.
///
/// Backoff is fixed and small: the failure modes worth retrying are brief
/// network blips, not systemic overload, so exponential growth buys nothing.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Maximum total attempts per invocation (first try included).
    pub max_attempts: u32,

    /// Fixed delay between attempts in milliseconds.
    pub backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_ms: 1_000,
        }
    }
}

/// Result log retention.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Maximum age of a log entry in seconds. Entries strictly older than
    /// this are evicted before each append.
    pub max_age_secs: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            // 3 days
            max_age_secs: 3 * 24 * 60 * 60,
        }
    }
}

/// Probabilistic run gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Probability that a triggered invocation actually probes. With an
    /// external cron firing every 5 minutes, 0.73 stretches the effective
    /// average interval toward ~7 minutes and makes it irregular.
    pub run_probability: f64,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            run_probability: 0.73,
        }
    }
}

/// Notification sink configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Webhook endpoint to POST each result to. `None` disables
    /// notification entirely. The `UPWATCH_WEBHOOK_URL` environment
    /// variable overrides this field.
    pub webhook_url: Option<String>,

    /// Deadline for the webhook callout in milliseconds. The check never
    /// waits longer than this on the sink.
    pub timeout_ms: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_ms: 5_000,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

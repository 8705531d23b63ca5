//! Notification sink integration.
//!
//! # Responsibilities
//! - Forward each executed probe result to an optional external sink
//! - Swallow every sink failure: notification is strictly best-effort
//!
//! # Design Decisions
//! - A trait with a no-op default keeps the core independent of any
//!   concrete notification backend
//! - The webhook client carries its own short timeout so a slow sink can
//!   never stall a check beyond that bound
//! - Failures are logged at `warn` and dropped; they never alter the probe
//!   outcome and never propagate

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::config::NotifierConfig;
use crate::monitor::MonitorError;
use crate::probe::ProbeResult;

/// Receives final probe results, fire-and-forget.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, result: &ProbeResult);
}

/// Default sink when no webhook is configured: does nothing.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _result: &ProbeResult) {}
}

/// POSTs each result as JSON to a webhook endpoint.
pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout: Duration) -> Result<Self, MonitorError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, result: &ProbeResult) {
        match self.client.post(&self.url).json(result).send().await {
            Ok(response) if !response.status().is_success() => {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "notification webhook rejected result"
                );
            }
            Ok(_) => {
                tracing::debug!("result forwarded to notification webhook");
            }
            Err(e) => {
                tracing::warn!(error = %e, "notification webhook unreachable");
            }
        }
    }
}

/// Build the configured sink: webhook when a URL is present, no-op otherwise.
pub fn from_config(config: &NotifierConfig) -> Result<Arc<dyn Notifier>, MonitorError> {
    match &config.webhook_url {
        Some(url) => {
            let timeout = Duration::from_millis(config.timeout_ms);
            Ok(Arc::new(WebhookNotifier::new(url.clone(), timeout)?))
        }
        None => Ok(Arc::new(NoopNotifier)),
    }
}

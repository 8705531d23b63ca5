//! Metrics collection and exposition.
//!
//! # Metrics
//! - `upwatch_checks_total` (counter): executed checks by outcome
//! - `upwatch_skips_total` (counter): invocations gated off by the sampler
//! - `upwatch_probe_duration_ms` (histogram): final-attempt latency
//! - `upwatch_log_entries` (gauge): result log size after append

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

use crate::probe::ProbeResult;

/// Install the Prometheus exporter with an HTTP listener.
///
/// Failure to bind is logged and otherwise ignored: metrics exposition is
/// not worth refusing to monitor over.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

pub fn record_check(result: &ProbeResult) {
    let outcome = if result.success {
        "pass"
    } else if result.status_code.is_some() {
        "http_error"
    } else {
        "unreachable"
    };
    metrics::counter!("upwatch_checks_total", "outcome" => outcome).increment(1);
    metrics::histogram!("upwatch_probe_duration_ms").record(result.response_time_ms as f64);
}

pub fn record_skip() {
    metrics::counter!("upwatch_skips_total").increment(1);
}

pub fn record_log_size(len: usize) {
    metrics::gauge!("upwatch_log_entries").set(len as f64);
}

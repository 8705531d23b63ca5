//! Trigger interface response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::probe::ProbeResult;

/// Summary of an executed check.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub response_time_ms: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub logs_count: usize,
}

impl CheckSummary {
    pub fn new(result: ProbeResult, logs_count: usize) -> Self {
        Self {
            success: result.success,
            status_code: result.status_code,
            response_time_ms: result.response_time_ms,
            timestamp: result.timestamp,
            error: result.error,
            logs_count,
        }
    }
}

/// Body for an invocation the sampler gated off.
#[derive(Debug, Serialize)]
pub struct SkippedSummary {
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl SkippedSummary {
    pub fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            message: "skipped",
            timestamp,
        }
    }
}

/// Body for an infrastructure fault in the monitor itself (HTTP 500).
#[derive(Debug, Serialize)]
pub struct FaultBody {
    pub success: bool,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl FaultBody {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
            timestamp: Utc::now(),
        }
    }
}

/// Static service descriptor for the status route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub target: String,
    pub logs_count: usize,
}

//! upwatch — single-target availability monitor.
//!
//! Probes one configured URL on demand, disguising each attempt as organic
//! browser traffic, and keeps a short rolling window of outcomes in memory.
//!
//! # Architecture Overview
//!
//! ```text
//!   external trigger (cron hitting GET /check)
//!        │
//!        ▼
//!   ┌─────────┐   run    ┌───────────────┐  attempt   ┌──────────────┐
//!   │ sampler │─────────▶│ retry control │───────────▶│    probe     │
//!   │  gate   │          │ (bounded loop)│◀───────────│   executor   │
//!   └────┬────┘          └───────┬───────┘  outcome   └──────┬───────┘
//!        │ skip                  │                           │
//!        ▼                       ▼                           ▼
//!   skipped summary        ┌──────────┐              ┌──────────────┐
//!                          │  result  │              │ fingerprint  │
//!                          │   log    │              │  generator   │
//!                          └────┬─────┘              └──────────────┘
//!                               │
//!                               ▼
//!                          ┌──────────┐
//!                          │ notifier │  (best effort, failures swallowed)
//!                          └──────────┘
//!
//!   Cross-cutting: config, observability (tracing + metrics)
//! ```
//!
//! Probe failures are data: an unreachable or slow target produces a normal
//! [`probe::ProbeResult`]. Only faults inside the monitor itself surface as
//! [`monitor::MonitorError`] and reach the trigger boundary as HTTP 500.

// Core subsystems
pub mod config;
pub mod http;
pub mod monitor;
pub mod probe;

// State and gating
pub mod history;
pub mod sampler;

// Cross-cutting concerns
pub mod notify;
pub mod observability;

pub use config::MonitorConfig;
pub use http::HttpServer;
pub use monitor::{CheckOutcome, Monitor, MonitorError};
pub use probe::ProbeResult;

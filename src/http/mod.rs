//! HTTP trigger interface.
//!
//! # Data Flow
//! ```text
//! GET /check
//!     → server.rs (axum route, timeout + trace layers)
//!     → monitor (gate, probe, log, notify)
//!     → response.rs (summary / skipped / fault body)
//!
//! GET /status, GET /
//!     → static service descriptor
//! ```
//!
//! Probe failure is still HTTP 200 here: the checker worked, the target did
//! not. Only an infrastructure fault inside the monitor yields HTTP 500.

pub mod response;
pub mod server;

pub use server::HttpServer;

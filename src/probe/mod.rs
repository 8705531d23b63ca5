//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! Check invocation:
//!     retry.rs (bounded attempt loop)
//!     → fingerprint.rs (fresh randomized identity per attempt)
//!     → executor.rs (one timed GET, deadline-cancelled)
//!     → result.rs (classified outcome)
//! ```
//!
//! # Design Decisions
//! - Every attempt has a deadline; an elapsed deadline drops the in-flight
//!   request future, which aborts the underlying connection
//! - A received HTTP response is authoritative: non-2xx is a failure but is
//!   never retried, transport failures and timeouts are
//! - Fingerprints are never reused across attempts

pub mod executor;
pub mod fingerprint;
pub mod result;
pub mod retry;

pub use executor::ProbeExecutor;
pub use fingerprint::Fingerprint;
pub use result::ProbeResult;
pub use retry::{run_with_retries, RetryPolicy};

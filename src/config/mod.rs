//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, env overrides)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → shared via Arc to the monitor and HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so a missing file still yields a runnable setup
//! - Validation separates syntactic (serde) from semantic checks
//! - The webhook URL can come from the environment so deployments can enable
//!   notifications without touching the config file

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::MonitorConfig;
pub use schema::NotifierConfig;
pub use schema::ProbeConfig;
pub use schema::RetentionConfig;
pub use schema::RetryConfig;
pub use schema::SamplerConfig;

//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, probability in [0, 1])
//! - Check URLs parse and carry an http(s) scheme
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use url::Url;

use crate::config::schema::MonitorConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_http_url(&config.target.url, "target.url", &mut errors);

    if let Some(url) = &config.notifier.webhook_url {
        check_http_url(url, "notifier.webhook_url", &mut errors);
    }

    if config.listener.bind_address.parse::<std::net::SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a valid socket address: {}", config.listener.bind_address),
        });
    }

    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError {
            field: "probe.timeout_ms",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.retries.max_attempts == 0 {
        errors.push(ValidationError {
            field: "retries.max_attempts",
            message: "must allow at least one attempt".to_string(),
        });
    }

    let p = config.sampler.run_probability;
    if !(0.0..=1.0).contains(&p) || p.is_nan() {
        errors.push(ValidationError {
            field: "sampler.run_probability",
            message: format!("must be within [0.0, 1.0], got {}", p),
        });
    }

    if config.retention.max_age_secs == 0 {
        errors.push(ValidationError {
            field: "retention.max_age_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    // worst case for one invocation: every attempt runs to its deadline,
    // with a backoff between attempts
    let attempts = u64::from(config.retries.max_attempts.max(1));
    let worst_case_ms =
        attempts * config.probe.timeout_ms + (attempts - 1) * config.retries.backoff_ms;
    if config.listener.request_timeout_secs.saturating_mul(1000) < worst_case_ms {
        errors.push(ValidationError {
            field: "listener.request_timeout_secs",
            message: format!(
                "must cover the probe worst case of {}ms (attempts × timeout + backoffs)",
                worst_case_ms
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_http_url(raw: &str, field: &'static str, errors: &mut Vec<ValidationError>) {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field,
            message: format!("unsupported scheme: {}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field,
            message: format!("not a valid URL: {}", e),
        }),
    }
}

//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::MonitorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the notifier webhook URL.
pub const WEBHOOK_URL_ENV: &str = "UPWATCH_WEBHOOK_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration.
///
/// A missing file is not an error: defaults apply, which keeps a bare
/// deployment runnable. Environment overrides are applied before
/// validation so a bad `UPWATCH_WEBHOOK_URL` is rejected at startup.
pub fn load_config(path: &Path) -> Result<MonitorConfig, ConfigError> {
    let mut config: MonitorConfig = if path.exists() {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&content).map_err(ConfigError::Parse)?
    } else {
        MonitorConfig::default()
    };

    apply_env_overrides(&mut config);

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn apply_env_overrides(config: &mut MonitorConfig) {
    if let Ok(url) = std::env::var(WEBHOOK_URL_ENV) {
        if !url.trim().is_empty() {
            config.notifier.webhook_url = Some(url);
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::AppError;

/// Presentation settings for the site shell.
///
/// Loaded from the `config.toml` bundled with the app. Every field has a
/// default so that a missing or incomplete file still yields a usable site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_support_email")]
    pub support_email: String,
    /// Milliseconds between dashboard clock refreshes.
    #[serde(default = "default_clock_interval_ms")]
    pub clock_interval_ms: u64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            tagline: default_tagline(),
            support_email: default_support_email(),
            clock_interval_ms: default_clock_interval_ms(),
        }
    }
}

/// Client-side logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Parse a config document. An unknown log level is rejected here rather
    /// than silently widening logging at runtime.
    pub fn from_toml(source: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(source)?;
        match config.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(config),
            other => Err(AppError::config(format!("unknown log level `{other}`"))),
        }
    }
}

fn default_brand() -> String {
    "SkillSyncer".to_string()
}

fn default_tagline() -> String {
    "Connecting talent with opportunity".to_string()
}

fn default_support_email() -> String {
    "support@skillsyncer.com".to_string()
}

fn default_clock_interval_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    "warn".to_string()
}

//! Bundled site configuration.

use std::sync::OnceLock;

use shared_types::AppConfig;

const CONFIG_SOURCE: &str = include_str!("../config.toml");

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// The parsed `config.toml`. A malformed file is logged once and replaced by
/// defaults so the site still renders.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| match AppConfig::from_toml(CONFIG_SOURCE) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "invalid config.toml, using defaults");
            AppConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_parses() {
        let config = AppConfig::from_toml(CONFIG_SOURCE).expect("bundled config.toml");
        assert_eq!(config.site.brand, "SkillSyncer");
        assert_eq!(config.logging.level, "warn");
        assert!(config.site.clock_interval_ms > 0);
    }
}

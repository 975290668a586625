use serde::{Deserialize, Serialize};

use crate::{AppError, ViewerRole, CURRENT_USER};

/// Portal-wide display settings.
///
/// Loaded from `config.toml`. Every field has a default so that a missing
/// or partial file still yields a working dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
    /// Owner value that identifies the signed-in officer's cases.
    #[serde(default = "default_current_user")]
    pub current_user: String,
    /// Currency code shown in front of payment amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub default_role: ViewerRole,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_title() -> String {
    "Open ownership portal".to_string()
}

fn default_subtitle() -> String {
    "Day-to-day work overview".to_string()
}

fn default_current_user() -> String {
    CURRENT_USER.to_string()
}

fn default_currency() -> String {
    "ZMW".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            current_user: default_current_user(),
            currency: default_currency(),
            default_role: ViewerRole::default(),
            log_level: default_log_level(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub portal: PortalSettings,
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl PortalConfig {
    /// Parse and check a `config.toml` body.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        let config: PortalConfig = toml::from_str(contents)?;
        let level = config.portal.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::config(format!(
                "Unknown log level: {}",
                config.portal.log_level
            )));
        }
        if config.portal.current_user.trim().is_empty() {
            return Err(AppError::config("current_user must not be empty"));
        }
        Ok(config)
    }
}

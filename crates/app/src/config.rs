use shared_types::{AppError, PortalConfig};
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so web builds need no
/// filesystem access.
const CONFIG_TOML: &str = include_str!("../../../config.toml");

/// Parse the embedded config and store it in the global `OnceLock`. Only the
/// first call has effect.
///
/// Returns the rejection reason when the file was unusable and defaults were
/// stored instead, so the caller can log it once a subscriber exists.
pub fn load_portal_config() -> Option<AppError> {
    let mut rejected = None;
    CONFIG.get_or_init(|| match PortalConfig::from_toml_str(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            rejected = Some(e);
            PortalConfig::default()
        }
    });
    rejected
}

/// The loaded config. Falls back to defaults if `load_portal_config()` was
/// never called or the file was rejected.
pub fn portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(|| PortalConfig::from_toml_str(CONFIG_TOML).unwrap_or_default())
}

/// Log level from config, `INFO` when unparseable.
pub fn log_level(config: &PortalConfig) -> tracing::Level {
    config
        .portal
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO)
}

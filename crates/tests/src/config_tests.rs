use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, PortalConfig, ViewerRole};

#[test]
fn partial_config_fills_defaults() {
    let config = PortalConfig::from_toml_str("[portal]\ndefault_role = \"supervisor\"\n").unwrap();
    assert_eq!(config.portal.default_role, ViewerRole::Supervisor);
    assert_eq!(config.portal.current_user, "You");
    assert_eq!(config.portal.currency, "ZMW");
}

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(PortalConfig::from_toml_str("").unwrap(), PortalConfig::default());
}

#[test]
fn bad_log_level_is_config_error() {
    let err = PortalConfig::from_toml_str("[portal]\nlog_level = \"loud\"\n").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}

#[test]
fn unknown_role_is_config_error() {
    let err = PortalConfig::from_toml_str("[portal]\ndefault_role = \"admin\"\n").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ConfigError);
}

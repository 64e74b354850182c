use navigation::config::parse_or_default;
use navigation::{ShellSession, SidebarPhase};
use pretty_assertions::assert_eq;
use shared_types::{Role, ShellConfig, ShellErrorKind, ShellMode, StandaloneApp};

#[test]
fn test_empty_file_gives_admin_wide_pinned() {
    let config = parse_or_default("");
    assert_eq!(config, ShellConfig::default());
    let session = ShellSession::from_config(&config);
    assert_eq!(session.role(), Role::Admin);
    assert_eq!(session.sidebar().phase(), SidebarPhase::WideLocked);
}

#[test]
fn test_partial_sidebar_section_keeps_other_default() {
    let config = parse_or_default("[sidebar]\ncollapsed = true\n");
    assert!(config.sidebar.collapsed);
    assert!(config.sidebar.locked);
}

#[test]
fn test_standalone_default_role_starts_in_portal() {
    let config = parse_or_default("[shell]\ndefault_role = \"student\"\n");
    let session = ShellSession::from_config(&config);
    assert_eq!(
        session.mode(),
        ShellMode::Standalone(StandaloneApp::StudentPortal)
    );
}

#[test]
fn test_unknown_default_role_starts_as_admin() {
    let config = parse_or_default("[shell]\ndefault_role = \"registrar\"\n");
    assert_eq!(config.default_role(), Role::Admin);
}

#[test]
fn test_wrong_types_fall_back_to_defaults() {
    let config = parse_or_default("[sidebar]\nlocked = \"yes\"\n");
    assert_eq!(config, ShellConfig::default());
}

#[test]
fn test_strict_parse_reports_invalid_config() {
    let err = ShellConfig::from_toml_str("[sidebar]\nlocked = \"yes\"\n").unwrap_err();
    assert_eq!(err.kind, ShellErrorKind::InvalidConfig);
}

use shared_types::ShellConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ShellConfig> = OnceLock::new();

/// Parse shell settings, falling back to defaults when the contents are not
/// valid TOML for [`ShellConfig`].
pub fn parse_or_default(contents: &str) -> ShellConfig {
    match ShellConfig::from_toml_str(contents) {
        Ok(config) => {
            if config.shell.default_role.parse::<shared_types::Role>().is_err() {
                tracing::warn!(
                    role = %config.shell.default_role,
                    "unknown default_role, starting as admin"
                );
            }
            config
        }
        Err(err) => {
            tracing::warn!(%err, "invalid shell config, using defaults");
            ShellConfig::default()
        }
    }
}

/// Parse `contents` and store the result process-wide. Only the first call
/// has any effect.
pub fn load_shell_config(contents: &str) -> &'static ShellConfig {
    CONFIG.get_or_init(|| {
        let config = parse_or_default(contents);
        tracing::info!(
            role = %config.default_role(),
            collapsed = config.sidebar.collapsed,
            locked = config.sidebar.locked,
            "shell config loaded"
        );
        config
    })
}

/// The loaded shell config, or defaults if `load_shell_config` has not run.
pub fn shell_config() -> &'static ShellConfig {
    static DEFAULT: OnceLock<ShellConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(ShellConfig::default))
}

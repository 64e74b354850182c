use serde::{Deserialize, Serialize};

use crate::{Role, ShellError};

/// `[shell]` section: what the shell shows when it mounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellSection {
    #[serde(default = "default_role_key")]
    pub default_role: String,
}

fn default_role_key() -> String {
    Role::default().as_str().to_string()
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            default_role: default_role_key(),
        }
    }
}

/// `[sidebar]` section: the initial collapse/lock flags.
///
/// Every field defaults independently so a partial section keeps the
/// remaining defaults (wide and pinned open).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SidebarDefaults {
    #[serde(default)]
    pub collapsed: bool,
    #[serde(default = "default_locked")]
    pub locked: bool,
}

fn default_locked() -> bool {
    true
}

impl Default for SidebarDefaults {
    fn default() -> Self {
        Self {
            collapsed: false,
            locked: default_locked(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

/// Top-level config file structure matching `shell.toml`.
///
/// A missing or incomplete file yields the defaults for whatever is absent.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ShellConfig {
    #[serde(default)]
    pub shell: ShellSection,
    #[serde(default)]
    pub sidebar: SidebarDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShellConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ShellError> {
        Ok(toml::from_str(contents)?)
    }

    /// The configured starting role. Unrecognized keys fall back to Admin.
    pub fn default_role(&self) -> Role {
        Role::from_str_or_default(&self.shell.default_role)
    }
}

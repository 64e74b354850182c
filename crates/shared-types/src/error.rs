use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of shell errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ShellErrorKind {
    UnknownRole,
    InvalidConfig,
}

impl fmt::Display for ShellErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellErrorKind::UnknownRole => write!(f, "UnknownRole"),
            ShellErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Error raised at the fallible edges of the shell (role parsing and config
/// loading). Navigation transitions themselves never fail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShellError {
    pub kind: ShellErrorKind,
    pub message: String,
}

impl ShellError {
    pub fn unknown_role(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            kind: ShellErrorKind::UnknownRole,
            message: format!("no role named '{key}'"),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: ShellErrorKind::InvalidConfig,
            message: message.into(),
        }
    }
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ShellError {}

impl From<toml::de::Error> for ShellError {
    fn from(err: toml::de::Error) -> Self {
        ShellError::invalid_config(err.message().to_string())
    }
}

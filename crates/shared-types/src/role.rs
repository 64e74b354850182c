use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{ShellError, StandaloneApp};

/// The user type selected in the role switcher. Picks the menu tree and the
/// dashboard set for the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Faculty,
    Department,
    Student,
    Lecturer,
}

impl Role {
    /// Every role, in the order the role switcher lists them.
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Faculty,
        Role::Department,
        Role::Student,
        Role::Lecturer,
    ];

    /// Lowercase key used in config files and menu tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Faculty => "faculty",
            Role::Department => "department",
            Role::Student => "student",
            Role::Lecturer => "lecturer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Faculty => "Faculty Dean",
            Role::Department => "Head of Department",
            Role::Student => "Student",
            Role::Lecturer => "Lecturer",
        }
    }

    /// Parse a role key. Unknown values default to Admin.
    pub fn from_str_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// The role-owned application that replaces the shared shell, if any.
    pub fn standalone_app(&self) -> Option<StandaloneApp> {
        match self {
            Role::Student => Some(StandaloneApp::StudentPortal),
            Role::Lecturer => Some(StandaloneApp::LecturerPortal),
            Role::Admin | Role::Faculty | Role::Department => None,
        }
    }

    /// Returns true if selecting this role bypasses the shared shell.
    pub fn is_self_contained(&self) -> bool {
        self.standalone_app().is_some()
    }
}

impl FromStr for Role {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "faculty" => Ok(Role::Faculty),
            "department" => Ok(Role::Department),
            "student" => Ok(Role::Student),
            "lecturer" => Ok(Role::Lecturer),
            _ => Err(ShellError::unknown_role(s)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

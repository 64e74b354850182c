//! Navigation and view routing for the dashboard shell.
//!
//! Everything here is synchronous and UI-agnostic: the presentation layer
//! feeds user input into a [`ShellSession`] and renders whatever it reports.

pub mod config;
pub mod controller;
pub mod menus;
pub mod session;
pub mod sidebar;
pub mod views;

pub use controller::{NavigationController, Selection};
pub use session::{ShellEvent, ShellSession, ShellSnapshot};
pub use sidebar::{SidebarModel, SidebarPhase};

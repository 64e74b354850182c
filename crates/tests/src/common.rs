use navigation::{ShellEvent, ShellSession, SidebarModel};
use shared_types::Role;

/// Roles that use the shared shell.
pub const SHELL_ROLES: [Role; 3] = [Role::Admin, Role::Faculty, Role::Department];

/// A session as a fresh process would create it, for the given role.
pub fn session_for(role: Role) -> ShellSession {
    ShellSession::new(role, SidebarModel::default())
}

/// Apply `events` in arrival order.
pub fn replay(session: &mut ShellSession, events: impl IntoIterator<Item = ShellEvent>) {
    for event in events {
        session.apply(event);
    }
}

pub fn select(id: &str) -> ShellEvent {
    ShellEvent::SelectMenuItem { id: id.to_string() }
}

pub fn select_sub(parent_id: &str, id: &str) -> ShellEvent {
    ShellEvent::SelectSubmenuItem {
        parent_id: parent_id.to_string(),
        id: id.to_string(),
    }
}

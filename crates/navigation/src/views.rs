//! Dispatch from `(role, active view id)` to what the content area mounts.

use shared_types::{Role, ShellMode, ViewDescriptor, ViewKind};

/// Role-independent view ids. `"dashboard"` is deliberately absent: it is
/// resolved together with the role by [`dashboard_for`].
const VIEW_TABLE: &[(&str, ViewKind)] = &[
    ("finance-overview", ViewKind::FinanceOverview),
    ("fee-collection", ViewKind::FeeCollection),
    ("payroll", ViewKind::Payroll),
    ("hr-overview", ViewKind::HrOverview),
    ("staff-directory", ViewKind::StaffDirectory),
    ("leave-management", ViewKind::LeaveManagement),
    ("research-overview", ViewKind::ResearchOverview),
    ("grants", ViewKind::Grants),
    ("publications", ViewKind::Publications),
    ("timetable", ViewKind::Timetable),
    ("courses", ViewKind::Courses),
    ("examinations", ViewKind::Examinations),
    ("student-records", ViewKind::StudentRecords),
    ("library", ViewKind::Library),
    ("reports", ViewKind::Reports),
];

pub const DASHBOARD_VIEW_ID: &str = "dashboard";

/// Shell mode for a role. Self-contained roles bypass the shell entirely.
pub fn mode_for(role: Role) -> ShellMode {
    match role.standalone_app() {
        Some(app) => ShellMode::Standalone(app),
        None => ShellMode::Shell,
    }
}

/// The role-specific dashboard behind the shared `"dashboard"` id.
pub fn dashboard_for(role: Role) -> Option<ViewKind> {
    match role {
        Role::Admin => Some(ViewKind::AdminDashboard),
        Role::Faculty => Some(ViewKind::FacultyDashboard),
        Role::Department => Some(ViewKind::DepartmentDashboard),
        Role::Student | Role::Lecturer => None,
    }
}

/// Look up a role-independent view id.
pub fn lookup(id: &str) -> Option<ViewKind> {
    VIEW_TABLE
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, view)| *view)
}

/// Resolve what the content area should render. Never fails: ids without a
/// registered view come back as a placeholder labelled with the raw id.
pub fn resolve(role: Role, active_view_id: &str) -> ViewDescriptor {
    if let ShellMode::Standalone(app) = mode_for(role) {
        return ViewDescriptor::Standalone { app };
    }
    let view = if active_view_id == DASHBOARD_VIEW_ID {
        dashboard_for(role)
    } else {
        lookup(active_view_id)
    };
    match view {
        Some(view) => ViewDescriptor::View { view },
        None => {
            tracing::debug!(%role, id = active_view_id, "no view registered, using placeholder");
            ViewDescriptor::placeholder(active_view_id)
        }
    }
}

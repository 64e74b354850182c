use serde::{Deserialize, Serialize};

/// View id used when a role's menu tree is empty.
pub const FALLBACK_VIEW_ID: &str = "dashboard";

/// A role-owned application mounted instead of the shared shell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StandaloneApp {
    StudentPortal,
    LecturerPortal,
}

impl StandaloneApp {
    pub fn title(&self) -> &'static str {
        match self {
            StandaloneApp::StudentPortal => "Student Portal",
            StandaloneApp::LecturerPortal => "Lecturer Workspace",
        }
    }
}

/// The dashboard views the content area knows how to mount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    AdminDashboard,
    FacultyDashboard,
    DepartmentDashboard,
    FinanceOverview,
    FeeCollection,
    Payroll,
    HrOverview,
    StaffDirectory,
    LeaveManagement,
    ResearchOverview,
    Grants,
    Publications,
    Timetable,
    Courses,
    Examinations,
    StudentRecords,
    Library,
    Reports,
}

impl ViewKind {
    pub fn title(&self) -> &'static str {
        match self {
            ViewKind::AdminDashboard => "Institution Dashboard",
            ViewKind::FacultyDashboard => "Faculty Dashboard",
            ViewKind::DepartmentDashboard => "Department Dashboard",
            ViewKind::FinanceOverview => "Finance Overview",
            ViewKind::FeeCollection => "Fee Collection",
            ViewKind::Payroll => "Payroll",
            ViewKind::HrOverview => "Human Resources",
            ViewKind::StaffDirectory => "Staff Directory",
            ViewKind::LeaveManagement => "Leave Management",
            ViewKind::ResearchOverview => "Research Overview",
            ViewKind::Grants => "Research Grants",
            ViewKind::Publications => "Publications",
            ViewKind::Timetable => "Timetable",
            ViewKind::Courses => "Courses",
            ViewKind::Examinations => "Examinations",
            ViewKind::StudentRecords => "Student Records",
            ViewKind::Library => "Library",
            ViewKind::Reports => "Reports",
        }
    }
}

/// What the content area should render for the current session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewDescriptor {
    /// The role owns its whole application; the shell is not rendered.
    Standalone { app: StandaloneApp },
    /// A concrete dashboard view inside the shell.
    View { view: ViewKind },
    /// No view is registered for the id; carries the raw id as its label.
    Placeholder { label: String },
}

impl ViewDescriptor {
    pub fn placeholder(label: impl Into<String>) -> Self {
        ViewDescriptor::Placeholder {
            label: label.into(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            ViewDescriptor::Standalone { app } => app.title(),
            ViewDescriptor::View { view } => view.title(),
            ViewDescriptor::Placeholder { label } => label,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ViewDescriptor::Placeholder { .. })
    }
}

/// Whether the session renders the shared shell or a role-owned application.
/// Decided once per role change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mode", content = "app", rename_all = "snake_case")]
pub enum ShellMode {
    Shell,
    Standalone(StandaloneApp),
}

//! Per-role navigation trees.
//!
//! Each role maps to one `'static` slice. [`resolve`] hands out the same
//! slice on every call, so callers can detect a menu change with
//! [`std::ptr::eq`] instead of comparing trees.

use shared_types::{IconRef, MenuItem, Role};

// ── Admin ──────────────────────────────────────────────────────────────

const ADMIN_ACADEMICS: &[MenuItem] = &[
    MenuItem::leaf("courses", "Courses", IconRef::Academics),
    MenuItem::leaf("timetable", "Timetable", IconRef::Calendar),
    MenuItem::leaf("examinations", "Examinations", IconRef::Examinations),
    MenuItem::leaf("student-records", "Student Records", IconRef::Records),
];

const ADMIN_FINANCE: &[MenuItem] = &[
    MenuItem::leaf("finance-overview", "Overview", IconRef::Finance),
    MenuItem::leaf("fee-collection", "Fee Collection", IconRef::Finance),
    MenuItem::leaf("payroll", "Payroll", IconRef::Staff),
    MenuItem::leaf("budget", "Budget Planning", IconRef::Reports),
];

const ADMIN_HR: &[MenuItem] = &[
    MenuItem::leaf("hr-overview", "Overview", IconRef::People),
    MenuItem::leaf("staff-directory", "Staff Directory", IconRef::Staff),
    MenuItem::leaf("leave-management", "Leave Management", IconRef::Attendance),
    MenuItem::leaf("recruitment", "Recruitment", IconRef::People),
];

const ADMIN_RESEARCH: &[MenuItem] = &[
    MenuItem::leaf("research-overview", "Overview", IconRef::Research),
    MenuItem::leaf("grants", "Grants", IconRef::Finance),
    MenuItem::leaf("publications", "Publications", IconRef::Library),
];

const ADMIN_MENU: &[MenuItem] = &[
    MenuItem::leaf("dashboard", "Dashboard", IconRef::Dashboard),
    MenuItem::parent("academics", "Academics", IconRef::Academics, ADMIN_ACADEMICS),
    MenuItem::parent("finance", "Finance", IconRef::Finance, ADMIN_FINANCE),
    MenuItem::parent("hr", "Human Resources", IconRef::People, ADMIN_HR),
    MenuItem::parent("research", "Research", IconRef::Research, ADMIN_RESEARCH),
    MenuItem::leaf("library", "Library", IconRef::Library),
    MenuItem::leaf("hostel", "Hostels", IconRef::Hostel),
    MenuItem::leaf("reports", "Reports", IconRef::Reports),
    MenuItem::leaf("settings", "Settings", IconRef::Settings),
];

// ── Faculty ────────────────────────────────────────────────────────────

const FACULTY_ACADEMICS: &[MenuItem] = &[
    MenuItem::leaf("courses", "Courses", IconRef::Academics),
    MenuItem::leaf("timetable", "Timetable", IconRef::Calendar),
    MenuItem::leaf("examinations", "Examinations", IconRef::Examinations),
];

const FACULTY_RESEARCH: &[MenuItem] = &[
    MenuItem::leaf("research-overview", "Overview", IconRef::Research),
    MenuItem::leaf("grants", "Grants", IconRef::Finance),
    MenuItem::leaf("publications", "Publications", IconRef::Library),
];

const FACULTY_STAFF: &[MenuItem] = &[
    MenuItem::leaf("staff-directory", "Directory", IconRef::Staff),
    MenuItem::leaf("leave-management", "Leave", IconRef::Attendance),
];

const FACULTY_MENU: &[MenuItem] = &[
    MenuItem::leaf("dashboard", "Dashboard", IconRef::Dashboard),
    MenuItem::parent("academics", "Academics", IconRef::Academics, FACULTY_ACADEMICS),
    MenuItem::parent("research", "Research", IconRef::Research, FACULTY_RESEARCH),
    MenuItem::parent("staff", "Staff", IconRef::Staff, FACULTY_STAFF),
    MenuItem::leaf("reports", "Reports", IconRef::Reports),
];

// ── Department ─────────────────────────────────────────────────────────

const DEPARTMENT_ACADEMICS: &[MenuItem] = &[
    MenuItem::leaf("courses", "Courses", IconRef::Academics),
    MenuItem::leaf("timetable", "Timetable", IconRef::Calendar),
    MenuItem::leaf("examinations", "Examinations", IconRef::Examinations),
    MenuItem::leaf("student-records", "Students", IconRef::Records),
];

const DEPARTMENT_STAFF: &[MenuItem] = &[
    MenuItem::leaf("staff-directory", "Directory", IconRef::Staff),
    MenuItem::leaf("leave-management", "Leave", IconRef::Attendance),
];

const DEPARTMENT_MENU: &[MenuItem] = &[
    MenuItem::leaf("dashboard", "Dashboard", IconRef::Dashboard),
    MenuItem::parent("academics", "Academics", IconRef::Academics, DEPARTMENT_ACADEMICS),
    MenuItem::parent("staff", "Staff", IconRef::Staff, DEPARTMENT_STAFF),
    MenuItem::leaf("publications", "Publications", IconRef::Library),
    MenuItem::leaf("reports", "Reports", IconRef::Reports),
];

// ── Self-contained roles ───────────────────────────────────────────────
// These never reach the shared sidebar; their own applications render the
// tree as a tab strip.

const STUDENT_MENU: &[MenuItem] = &[
    MenuItem::leaf("student-home", "Home", IconRef::Dashboard),
    MenuItem::leaf("my-courses", "My Courses", IconRef::Academics),
    MenuItem::leaf("my-timetable", "Timetable", IconRef::Calendar),
    MenuItem::leaf("results", "Results", IconRef::Examinations),
    MenuItem::leaf("fees", "Fees", IconRef::Finance),
];

const LECTURER_MENU: &[MenuItem] = &[
    MenuItem::leaf("lecturer-home", "Home", IconRef::Dashboard),
    MenuItem::leaf("my-classes", "My Classes", IconRef::Academics),
    MenuItem::leaf("attendance", "Attendance", IconRef::Attendance),
    MenuItem::leaf("grading", "Grading", IconRef::Examinations),
];

/// Menu tree for `role`.
pub fn resolve(role: Role) -> &'static [MenuItem] {
    match role {
        Role::Admin => ADMIN_MENU,
        Role::Faculty => FACULTY_MENU,
        Role::Department => DEPARTMENT_MENU,
        Role::Student => STUDENT_MENU,
        Role::Lecturer => LECTURER_MENU,
    }
}

/// Menu tree for a role key as it arrives from outside (config, URL,
/// serialized state). Unrecognized keys get the default role's tree.
pub fn resolve_key(key: &str) -> &'static [MenuItem] {
    match key.parse::<Role>() {
        Ok(role) => resolve(role),
        Err(err) => {
            tracing::debug!(%err, fallback = %Role::default(), "unrecognized role key");
            resolve(Role::default())
        }
    }
}

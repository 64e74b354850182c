//! Mock dashboard content mounted by the shell's content area.

use dioxus::prelude::*;
use shared_types::{ViewDescriptor, ViewKind};
use shared_ui::PageHeader;

mod academics;
mod campus;
mod dashboards;
mod finance;
mod hr;
mod placeholder;
mod research;

const PERCENT_MAX: f64 = 100.0;

/// `part` as a percentage of `whole`, capped at 100. Zero when `whole` is 0.
pub(crate) fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * PERCENT_MAX).min(PERCENT_MAX)
}

/// Thousands separators for whole currency amounts, e.g. `1234567` -> `"1,234,567"`.
pub(crate) fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Renders whatever the view resolver picked for the active id.
#[component]
pub fn ContentArea(view: ViewDescriptor, breadcrumb: Vec<String>) -> Element {
    let title = view.title().to_string();

    match view {
        ViewDescriptor::View { view } => rsx! {
            PageHeader { title: title, breadcrumb: breadcrumb }
            MountedView { view: view }
        },
        ViewDescriptor::Placeholder { label } => rsx! {
            PageHeader { title: title, breadcrumb: breadcrumb }
            placeholder::Placeholder { label: label }
        },
        // The shell is not mounted for standalone roles; nothing to show here.
        ViewDescriptor::Standalone { .. } => rsx! {},
    }
}

#[component]
fn MountedView(view: ViewKind) -> Element {
    match view {
        ViewKind::AdminDashboard => rsx! { dashboards::AdminDashboard {} },
        ViewKind::FacultyDashboard => rsx! { dashboards::FacultyDashboard {} },
        ViewKind::DepartmentDashboard => rsx! { dashboards::DepartmentDashboard {} },
        ViewKind::FinanceOverview => rsx! { finance::FinanceOverview {} },
        ViewKind::FeeCollection => rsx! { finance::FeeCollection {} },
        ViewKind::Payroll => rsx! { finance::Payroll {} },
        ViewKind::HrOverview => rsx! { hr::HrOverview {} },
        ViewKind::StaffDirectory => rsx! { hr::StaffDirectory {} },
        ViewKind::LeaveManagement => rsx! { hr::LeaveManagement {} },
        ViewKind::ResearchOverview => rsx! { research::ResearchOverview {} },
        ViewKind::Grants => rsx! { research::Grants {} },
        ViewKind::Publications => rsx! { research::Publications {} },
        ViewKind::Timetable => rsx! { academics::Timetable {} },
        ViewKind::Courses => rsx! { academics::Courses {} },
        ViewKind::Examinations => rsx! { academics::Examinations {} },
        ViewKind::StudentRecords => rsx! { academics::StudentRecords {} },
        ViewKind::Library => rsx! { campus::Library {} },
        ViewKind::Reports => rsx! { campus::Reports {} },
    }
}

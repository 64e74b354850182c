use dioxus::prelude::*;
use shared_types::{Role, StandaloneApp};
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid,
};

use super::{first_tab, tab_for, StandaloneHeader, TabStrip};
use crate::views::percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LecturerTab {
    Home,
    Classes,
    Attendance,
    Grading,
}

/// Lecturer menu ids and the tab each one opens.
const LECTURER_TABS: &[(&str, LecturerTab)] = &[
    ("lecturer-home", LecturerTab::Home),
    ("my-classes", LecturerTab::Classes),
    ("attendance", LecturerTab::Attendance),
    ("grading", LecturerTab::Grading),
];

/// Teaching workspace for lecturers.
#[component]
pub fn LecturerPortal() -> Element {
    let tabs = navigation::menus::resolve(Role::Lecturer);
    let mut active = use_signal(|| first_tab(tabs));
    let current = active();
    let tab = tab_for(LECTURER_TABS, &current, LecturerTab::Home);

    rsx! {
        div { class: "standalone-app",
            StandaloneHeader { app: StandaloneApp::LecturerPortal, subtitle: "Ms. J. Njeri · Computing" }
            TabStrip {
                tabs: tabs,
                active: current.clone(),
                on_select: move |id: &'static str| active.set(id.to_string()),
            }
            div { class: "standalone-content",
                match tab {
                    LecturerTab::Home => rsx! { LecturerHome {} },
                    LecturerTab::Classes => rsx! { MyClasses {} },
                    LecturerTab::Attendance => rsx! { Attendance {} },
                    LecturerTab::Grading => rsx! { Grading {} },
                }
            }
        }
    }
}

#[component]
fn LecturerHome() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Classes this week", value: "9" }
            StatCard { title: "Students taught", value: "318" }
            StatCard { title: "Scripts to mark", value: "46" }
        }
    }
}

#[component]
fn MyClasses() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Units taught", description: "Semester 1" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Code", "Unit", "Group", "Students"]),
                    rows: table_rows(&[
                        &["CSC 214", "Databases", "A", "96"],
                        &["CSC 214", "Databases", "B", "92"],
                        &["CSC 412", "Distributed Systems", "A", "54"],
                        &["CSC 610", "Research Methods", "MSc", "16"],
                    ]),
                }
            }
        }
    }
}

const CLASS_SIZE: u64 = 96;

#[component]
fn Attendance() -> Element {
    let bars: Vec<Bar> = [("Week 1", 91), ("Week 2", 88), ("Week 3", 80), ("Week 4", 74), ("Week 5", 77)]
        .into_iter()
        .map(|(week, present)| Bar::new(week, percent(present, CLASS_SIZE)))
        .collect();

    rsx! {
        Card {
            CardHeader { title: "CSC 214 group A", description: "Share of class present" }
            CardContent {
                BarChart { bars: bars, unit: "%", max: 100.0 }
            }
        }
        Card {
            CardHeader { title: "Today's register" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Reg. no.", "Name", "Status"]),
                    rows: table_rows(&[
                        &["S/2023/0142", "Brian Kiprono", "Present"],
                        &["S/2023/0177", "Grace Muthoni", "Present"],
                        &["S/2023/0203", "Hassan Ali", "Absent"],
                    ]),
                    status_column: 2,
                }
            }
        }
    }
}

#[component]
fn Grading() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Marks submission" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Unit", "Assessment", "Marked", "Status"]),
                    rows: table_rows(&[
                        &["CSC 214", "CAT 1", "188 / 188", "Submitted"],
                        &["CSC 214", "CAT 2", "142 / 188", "Pending"],
                        &["CSC 412", "Project", "54 / 54", "Approved"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

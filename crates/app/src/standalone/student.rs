use dioxus::prelude::*;
use shared_types::{Role, StandaloneApp};
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid, Trend,
};

use super::{first_tab, tab_for, StandaloneHeader, TabStrip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StudentTab {
    Home,
    Courses,
    Timetable,
    Results,
    Fees,
}

/// Student menu ids and the tab each one opens.
const STUDENT_TABS: &[(&str, StudentTab)] = &[
    ("student-home", StudentTab::Home),
    ("my-courses", StudentTab::Courses),
    ("my-timetable", StudentTab::Timetable),
    ("results", StudentTab::Results),
    ("fees", StudentTab::Fees),
];

/// Self-service portal for students.
#[component]
pub fn StudentPortal() -> Element {
    let tabs = navigation::menus::resolve(Role::Student);
    let mut active = use_signal(|| first_tab(tabs));
    let current = active();
    let tab = tab_for(STUDENT_TABS, &current, StudentTab::Home);

    rsx! {
        div { class: "standalone-app",
            StandaloneHeader { app: StandaloneApp::StudentPortal, subtitle: "Brian Kiprono · S/2023/0142" }
            TabStrip {
                tabs: tabs,
                active: current.clone(),
                on_select: move |id: &'static str| active.set(id.to_string()),
            }
            div { class: "standalone-content",
                match tab {
                    StudentTab::Home => rsx! { StudentHome {} },
                    StudentTab::Courses => rsx! { MyCourses {} },
                    StudentTab::Timetable => rsx! { MyTimetable {} },
                    StudentTab::Results => rsx! { Results {} },
                    StudentTab::Fees => rsx! { Fees {} },
                }
            }
        }
    }
}

#[component]
fn StudentHome() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Registered units", value: "7" }
            StatCard { title: "Current GPA", value: "3.42", caption: "0.12 up on last semester", trend: Trend::Up }
            StatCard { title: "Fee balance", value: "KES 12,500", caption: "Due 15 Nov" }
        }
        Card {
            CardHeader { title: "Announcements" }
            CardContent {
                ul { class: "announcement-list",
                    li { "Unit registration for next semester opens 4 November." }
                    li { "Library hours extended during examinations." }
                }
            }
        }
    }
}

#[component]
fn MyCourses() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Registered units", description: "Semester 1" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Code", "Unit", "Lecturer", "Status"]),
                    rows: table_rows(&[
                        &["CSC 214", "Databases", "Ms. J. Njeri", "Active"],
                        &["CSC 221", "Data Structures", "Dr. P. Kamau", "Active"],
                        &["MAT 202", "Linear Algebra", "Dr. E. Barasa", "Active"],
                        &["COM 210", "Technical Writing", "Mr. T. Odhiambo", "Pending"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

#[component]
fn MyTimetable() -> Element {
    rsx! {
        Card {
            CardHeader { title: "This week" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Day", "Time", "Unit", "Venue"]),
                    rows: table_rows(&[
                        &["Monday", "11:00", "CSC 214 Databases", "Lab 4"],
                        &["Tuesday", "08:00", "MAT 202 Linear Algebra", "LT 3"],
                        &["Wednesday", "10:00", "CSC 221 Data Structures", "LT 1"],
                        &["Friday", "14:00", "COM 210 Technical Writing", "SB 7"],
                    ]),
                }
            }
        }
    }
}

#[component]
fn Results() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Last semester", description: "Provisional until senate approval" }
            CardContent {
                BarChart {
                    max: 100.0,
                    bars: vec![
                        Bar::new("CSC 110", 74.0),
                        Bar::new("CSC 120", 68.0),
                        Bar::new("MAT 101", 81.0),
                        Bar::new("PHY 101", 59.0),
                    ],
                }
            }
        }
    }
}

#[component]
fn Fees() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Billed", value: "KES 61,000" }
            StatCard { title: "Paid", value: "KES 48,500" }
            StatCard { title: "Balance", value: "KES 12,500", trend: Trend::Down, caption: "Due 15 Nov" }
        }
        Card {
            CardHeader { title: "Statement" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Date", "Item", "Amount", "Status"]),
                    rows: table_rows(&[
                        &["02 Sep", "Tuition, semester 1", "KES 52,000", "Partial"],
                        &["02 Sep", "Hostel", "KES 9,000", "Paid"],
                        &["12 Sep", "Payment RCT-20931", "KES 48,500", "Paid"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

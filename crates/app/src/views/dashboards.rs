use dioxus::prelude::*;
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid, Trend,
};

use super::{group_thousands, percent};

const ENROLLED_STUDENTS: u64 = 18_420;
const ENROLMENT_CAPACITY: u64 = 20_000;
const FEES_COLLECTED: u64 = 412_880_000;
const FEES_BILLED: u64 = 530_000_000;

/// Institution-wide overview for administrators.
#[component]
pub fn AdminDashboard() -> Element {
    let occupancy = format!("{:.0}% of capacity", percent(ENROLLED_STUDENTS, ENROLMENT_CAPACITY));
    let collected = format!("{:.0}% of billed", percent(FEES_COLLECTED, FEES_BILLED));
    let students = group_thousands(ENROLLED_STUDENTS);
    let fees = format!("KES {}", group_thousands(FEES_COLLECTED));

    rsx! {
        StatGrid {
            StatCard { title: "Enrolled students", value: students, caption: occupancy, trend: Trend::Up }
            StatCard { title: "Fees collected", value: fees, caption: collected, trend: Trend::Up }
            StatCard { title: "Teaching staff", value: "1,146", caption: "12 new this term", trend: Trend::Flat }
            StatCard { title: "Active grants", value: "87", caption: "5 awaiting approval", trend: Trend::Down }
        }

        div { class: "view-columns",
            Card {
                CardHeader { title: "Enrolment by faculty", description: "Current academic year" }
                CardContent {
                    BarChart {
                        bars: vec![
                            Bar::new("Engineering", 4210.0),
                            Bar::new("Business", 3890.0),
                            Bar::new("Science", 3370.0),
                            Bar::new("Medicine", 2150.0),
                            Bar::new("Education", 2840.0),
                            Bar::new("Law", 1960.0),
                        ],
                    }
                }
            }
            Card {
                CardHeader { title: "Pending approvals" }
                CardContent {
                    DataTable {
                        columns: table_columns(&["Request", "Owner", "Status"]),
                        rows: table_rows(&[
                            &["Budget reallocation Q3", "Finance", "Pending"],
                            &["New course: Data Ethics", "Science", "Under review"],
                            &["Hostel block C repairs", "Estates", "Approved"],
                            &["Visiting lecturer contract", "HR", "Pending"],
                        ]),
                        status_column: 2,
                    }
                }
            }
        }
    }
}

/// Faculty-level overview for deans.
#[component]
pub fn FacultyDashboard() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Departments", value: "6" }
            StatCard { title: "Students", value: "4,210", caption: "3.1% up on last year", trend: Trend::Up }
            StatCard { title: "Academic staff", value: "238" }
            StatCard { title: "Pass rate", value: "81%", caption: "1.4 points down", trend: Trend::Down }
        }

        div { class: "view-columns",
            Card {
                CardHeader { title: "Pass rate by department", description: "Last examination period" }
                CardContent {
                    BarChart {
                        unit: "%",
                        max: 100.0,
                        bars: vec![
                            Bar::new("Civil", 84.0),
                            Bar::new("Electrical", 79.0),
                            Bar::new("Mechanical", 76.5),
                            Bar::new("Computing", 88.0),
                            Bar::new("Chemical", 73.0),
                            Bar::new("Architecture", 86.0),
                        ],
                    }
                }
            }
            Card {
                CardHeader { title: "Department heads" }
                CardContent {
                    DataTable {
                        columns: table_columns(&["Department", "Head", "Status"]),
                        rows: table_rows(&[
                            &["Civil", "Dr. Amina Otieno", "Active"],
                            &["Electrical", "Prof. K. Mwangi", "Active"],
                            &["Mechanical", "Dr. L. Achieng", "On leave"],
                            &["Computing", "Dr. P. Kamau", "Active"],
                        ]),
                        status_column: 2,
                    }
                }
            }
        }
    }
}

/// Department overview for heads of department.
#[component]
pub fn DepartmentDashboard() -> Element {
    let attendance = format!("{:.0}%", percent(1_532, 1_740));

    rsx! {
        StatGrid {
            StatCard { title: "Courses running", value: "34" }
            StatCard { title: "Lecturers", value: "41", caption: "2 on leave", trend: Trend::Flat }
            StatCard { title: "Attendance this week", value: attendance, trend: Trend::Up, caption: "Across all units" }
            StatCard { title: "Papers this year", value: "19" }
        }

        Card {
            CardHeader { title: "Units at risk", description: "Attendance below 70% or marks outstanding" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Unit", "Lecturer", "Issue", "Status"]),
                    rows: table_rows(&[
                        &["CSC 301 Operating Systems", "Dr. P. Kamau", "Low attendance", "At risk"],
                        &["CSC 214 Databases", "Ms. J. Njeri", "Marks outstanding", "Pending"],
                        &["CSC 110 Programming I", "Mr. T. Odhiambo", "Resolved", "On track"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid, Trend,
};

#[component]
pub fn HrOverview() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Headcount", value: "2,204" }
            StatCard { title: "Open positions", value: "37", caption: "9 closing this week", trend: Trend::Up }
            StatCard { title: "On leave today", value: "58" }
            StatCard { title: "Attrition (12 months)", value: "4.2%", caption: "0.6 points down", trend: Trend::Down }
        }

        Card {
            CardHeader { title: "Staff by category" }
            CardContent {
                BarChart {
                    bars: vec![
                        Bar::new("Academic", 1146.0),
                        Bar::new("Administrative", 612.0),
                        Bar::new("Technical", 284.0),
                        Bar::new("Support", 162.0),
                    ],
                }
            }
        }
    }
}

#[component]
pub fn StaffDirectory() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Staff", description: "Showing the most recently updated records" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Staff no.", "Name", "Department", "Role", "Status"]),
                    rows: table_rows(&[
                        &["ST-0012", "Dr. Amina Otieno", "Civil Engineering", "Head of Department", "Active"],
                        &["ST-0148", "Prof. K. Mwangi", "Electrical Engineering", "Professor", "Active"],
                        &["ST-0311", "Dr. L. Achieng", "Mechanical Engineering", "Senior Lecturer", "On leave"],
                        &["ST-0457", "Ms. J. Njeri", "Computing", "Lecturer", "Active"],
                        &["ST-0903", "Mr. D. Wekesa", "Registry", "Records Officer", "Suspended"],
                    ]),
                    status_column: 4,
                }
            }
        }
    }
}

#[component]
pub fn LeaveManagement() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Requests this month", value: "126" }
            StatCard { title: "Awaiting approval", value: "14", trend: Trend::Up, caption: "4 more than last week" }
        }

        Card {
            CardHeader { title: "Leave requests" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Employee", "Type", "From", "To", "Status"]),
                    rows: table_rows(&[
                        &["Dr. L. Achieng", "Sabbatical", "01 Sep", "28 Feb", "Approved"],
                        &["Mr. T. Odhiambo", "Annual", "21 Oct", "25 Oct", "Pending"],
                        &["Ms. R. Chebet", "Sick", "14 Oct", "16 Oct", "Approved"],
                        &["Mr. S. Mutua", "Annual", "02 Nov", "15 Nov", "Rejected"],
                    ]),
                    status_column: 4,
                }
            }
        }
    }
}

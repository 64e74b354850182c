use dioxus::prelude::*;
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid, Trend,
};

use super::percent;

const LOANS_OUT: u64 = 3_412;
const LOANS_OVERDUE: u64 = 287;

#[component]
pub fn Library() -> Element {
    let overdue = format!("{:.1}% of loans", percent(LOANS_OVERDUE, LOANS_OUT));

    rsx! {
        StatGrid {
            StatCard { title: "Titles held", value: "214,906" }
            StatCard { title: "On loan", value: "3,412" }
            StatCard { title: "Overdue", value: "287", caption: overdue, trend: Trend::Down }
        }

        Card {
            CardHeader { title: "Overdue loans" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Borrower", "Title", "Due", "Status"]),
                    rows: table_rows(&[
                        &["S/2022/1187", "Principles of Economics", "02 Oct", "Overdue"],
                        &["ST-0457", "Database System Concepts", "30 Sep", "Overdue"],
                        &["S/2023/0142", "Introduction to Algorithms", "21 Oct", "Active"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

#[component]
pub fn Reports() -> Element {
    rsx! {
        div { class: "view-columns",
            Card {
                CardHeader { title: "Graduation rate", description: "By cohort, within expected time" }
                CardContent {
                    BarChart {
                        unit: "%",
                        max: 100.0,
                        bars: vec![
                            Bar::new("2019 intake", 78.0),
                            Bar::new("2020 intake", 74.5),
                            Bar::new("2021 intake", 81.0),
                        ],
                    }
                }
            }
            Card {
                CardHeader { title: "Scheduled reports" }
                CardContent {
                    DataTable {
                        columns: table_columns(&["Report", "Frequency", "Owner"]),
                        rows: table_rows(&[
                            &["Enrolment summary", "Weekly", "Registry"],
                            &["Cash flow", "Monthly", "Finance"],
                            &["Research output", "Quarterly", "Research Office"],
                            &["Regulator return", "Annually", "Quality Assurance"],
                        ]),
                    }
                }
            }
        }
    }
}

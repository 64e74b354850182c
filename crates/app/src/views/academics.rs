use dioxus::prelude::*;
use shared_ui::{
    table_columns, table_rows, Card, CardContent, CardHeader, DataTable, StatCard, StatGrid,
};

#[component]
pub fn Timetable() -> Element {
    rsx! {
        Card {
            CardHeader { title: "This week", description: "Teaching timetable, main campus" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Day", "Time", "Unit", "Venue", "Lecturer"]),
                    rows: table_rows(&[
                        &["Monday", "08:00", "CSC 110 Programming I", "LT 2", "Mr. T. Odhiambo"],
                        &["Monday", "11:00", "CSC 214 Databases", "Lab 4", "Ms. J. Njeri"],
                        &["Tuesday", "09:00", "CSC 301 Operating Systems", "LT 1", "Dr. P. Kamau"],
                        &["Wednesday", "14:00", "ECE 220 Circuits II", "EB 12", "Prof. K. Mwangi"],
                        &["Thursday", "10:00", "CVE 310 Structures", "EB 3", "Dr. A. Otieno"],
                    ]),
                }
            }
        }
    }
}

#[component]
pub fn Courses() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Programmes", value: "146" }
            StatCard { title: "Units offered this term", value: "1,092" }
        }

        Card {
            CardHeader { title: "Programmes" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Code", "Programme", "Faculty", "Students", "Status"]),
                    rows: table_rows(&[
                        &["BSC-CS", "BSc Computer Science", "Science", "912", "Active"],
                        &["BENG-CE", "BEng Civil Engineering", "Engineering", "704", "Active"],
                        &["BCOM", "Bachelor of Commerce", "Business", "1,388", "Active"],
                        &["MSC-DS", "MSc Data Science", "Science", "64", "Pending"],
                    ]),
                    status_column: 4,
                }
            }
        }
    }
}

#[component]
pub fn Examinations() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Papers scheduled", value: "418" }
            StatCard { title: "Results submitted", value: "61%" }
            StatCard { title: "Irregularity cases", value: "7" }
        }

        Card {
            CardHeader { title: "Marks submission", description: "End of semester examinations" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Unit", "Examiner", "Sat", "Status"]),
                    rows: table_rows(&[
                        &["CSC 301", "Dr. P. Kamau", "142", "Submitted"],
                        &["CSC 214", "Ms. J. Njeri", "188", "Pending"],
                        &["ECE 220", "Prof. K. Mwangi", "96", "Approved"],
                        &["CVE 310", "Dr. A. Otieno", "77", "Overdue"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

#[component]
pub fn StudentRecords() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Student records", description: "Recently updated" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Reg. no.", "Name", "Programme", "Year", "Status"]),
                    rows: table_rows(&[
                        &["S/2023/0142", "Brian Kiprono", "BSc Computer Science", "2", "Active"],
                        &["S/2022/1187", "Faith Wanjiru", "Bachelor of Commerce", "3", "Active"],
                        &["S/2021/0890", "Kevin Omondi", "BEng Civil Engineering", "4", "Suspended"],
                        &["S/2024/0031", "Mercy Atieno", "BSc Computer Science", "1", "Active"],
                    ]),
                    status_column: 4,
                }
            }
        }
    }
}

use dioxus::prelude::*;
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid, Trend,
};

use super::{group_thousands, percent};

struct BudgetLine {
    name: &'static str,
    allocated: u64,
    spent: u64,
}

const BUDGET: &[BudgetLine] = &[
    BudgetLine { name: "Salaries", allocated: 310_000_000, spent: 236_400_000 },
    BudgetLine { name: "Teaching materials", allocated: 42_000_000, spent: 31_900_000 },
    BudgetLine { name: "Estates", allocated: 65_000_000, spent: 58_100_000 },
    BudgetLine { name: "Research support", allocated: 28_000_000, spent: 12_300_000 },
    BudgetLine { name: "ICT", allocated: 35_000_000, spent: 29_800_000 },
];

#[component]
pub fn FinanceOverview() -> Element {
    let allocated: u64 = BUDGET.iter().map(|line| line.allocated).sum();
    let spent: u64 = BUDGET.iter().map(|line| line.spent).sum();
    let utilisation = format!("{:.0}% of budget", percent(spent, allocated));
    let bars: Vec<Bar> = BUDGET
        .iter()
        .map(|line| Bar::new(line.name, percent(line.spent, line.allocated)))
        .collect();

    rsx! {
        StatGrid {
            StatCard { title: "Annual budget", value: format!("KES {}", group_thousands(allocated)) }
            StatCard { title: "Spent to date", value: format!("KES {}", group_thousands(spent)), caption: utilisation, trend: Trend::Up }
            StatCard { title: "Open invoices", value: "142", caption: "18 overdue", trend: Trend::Down }
        }

        Card {
            CardHeader { title: "Budget utilisation", description: "Spent as a share of allocation" }
            CardContent {
                BarChart { bars: bars, unit: "%", max: 100.0 }
            }
        }
    }
}

#[component]
pub fn FeeCollection() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Billed this term", value: "KES 530,000,000" }
            StatCard { title: "Collected", value: "KES 412,880,000", caption: "78% of billed", trend: Trend::Up }
            StatCard { title: "Students with arrears", value: "2,318", caption: "240 fewer than last term", trend: Trend::Down }
        }

        Card {
            CardHeader { title: "Recent payments" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Receipt", "Student", "Amount", "Status"]),
                    rows: table_rows(&[
                        &["RCT-20931", "S/2023/0142", "KES 48,500", "Paid"],
                        &["RCT-20932", "S/2022/1187", "KES 20,000", "Partial"],
                        &["RCT-20933", "S/2024/0031", "KES 56,000", "Paid"],
                        &["INV-11804", "S/2021/0890", "KES 61,200", "Overdue"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

#[component]
pub fn Payroll() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Staff on payroll", value: "2,204" }
            StatCard { title: "Gross this month", value: "KES 19,640,000", trend: Trend::Flat, caption: "Unchanged" }
            StatCard { title: "Next run", value: "28 Oct" }
        }

        Card {
            CardHeader { title: "Payroll runs", description: "Last four months" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Period", "Employees", "Gross", "Status"]),
                    rows: table_rows(&[
                        &["October", "2,204", "KES 19,640,000", "Pending"],
                        &["September", "2,198", "KES 19,612,000", "Paid"],
                        &["August", "2,190", "KES 19,540,000", "Paid"],
                        &["July", "2,187", "KES 19,498,000", "Paid"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

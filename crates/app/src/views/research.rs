use dioxus::prelude::*;
use shared_ui::{
    table_columns, table_rows, Bar, BarChart, Card, CardContent, CardHeader, DataTable, StatCard,
    StatGrid, Trend,
};

#[component]
pub fn ResearchOverview() -> Element {
    rsx! {
        StatGrid {
            StatCard { title: "Active projects", value: "112" }
            StatCard { title: "Grant income", value: "KES 640M", caption: "12% up year on year", trend: Trend::Up }
            StatCard { title: "Publications", value: "318", caption: "This calendar year" }
        }

        Card {
            CardHeader { title: "Publications by faculty" }
            CardContent {
                BarChart {
                    bars: vec![
                        Bar::new("Medicine", 96.0),
                        Bar::new("Science", 88.0),
                        Bar::new("Engineering", 71.0),
                        Bar::new("Business", 34.0),
                        Bar::new("Education", 29.0),
                    ],
                }
            }
        }
    }
}

#[component]
pub fn Grants() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Grant portfolio", description: "Applications and awards" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Reference", "Title", "Funder", "Amount", "Status"]),
                    rows: table_rows(&[
                        &["GR-2024-017", "Drought-resilient sorghum", "AGRA", "USD 420,000", "Funded"],
                        &["GR-2024-031", "Low-cost malaria diagnostics", "Wellcome", "GBP 310,000", "Under review"],
                        &["GR-2025-004", "Off-grid solar microgrids", "EU Horizon", "EUR 1,200,000", "Submitted"],
                        &["GR-2023-112", "Urban water quality", "NRF", "KES 18,000,000", "Rejected"],
                    ]),
                    status_column: 4,
                }
            }
        }
    }
}

#[component]
pub fn Publications() -> Element {
    rsx! {
        Card {
            CardHeader { title: "Recent publications" }
            CardContent {
                DataTable {
                    columns: table_columns(&["Title", "Lead author", "Venue", "Status"]),
                    rows: table_rows(&[
                        &["Rainfall variability and maize yield", "Dr. A. Otieno", "Agric. Systems", "Published"],
                        &["Sparse attention for Swahili ASR", "Ms. J. Njeri", "Interspeech", "Under review"],
                        &["Lime-stabilised earth blocks", "Dr. L. Achieng", "Constr. Build. Mater.", "Published"],
                    ]),
                    status_column: 3,
                }
            }
        }
    }
}

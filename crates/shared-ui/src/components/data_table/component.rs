use dioxus::prelude::*;

use crate::StatusBadge;

/// Owned column headers from string literals.
pub fn table_columns(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}

/// Owned table rows from string-literal rows.
pub fn table_rows(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}

fn padded(row: &[String], width: usize) -> Vec<String> {
    (0..width)
        .map(|i| row.get(i).cloned().unwrap_or_default())
        .collect()
}

/// Scrollable read-only table.
///
/// When `status_column` is set, cells in that column render as status
/// badges. Rows shorter than the header are padded with empty cells.
#[component]
pub fn DataTable(
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    #[props(default)] status_column: Option<usize>,
) -> Element {
    let width = columns.len();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                thead {
                    tr {
                        for (i, column) in columns.iter().enumerate() {
                            th { key: "{i}", "{column}" }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { class: "data-table-empty", colspan: "{width}", "No records" }
                        }
                    }
                    for (r, row) in rows.iter().enumerate() {
                        tr { key: "{r}", class: "data-table-row",
                            for (i, cell) in padded(row, width).into_iter().enumerate() {
                                td { key: "{i}",
                                    if status_column == Some(i) {
                                        StatusBadge { status: cell.clone() }
                                    } else {
                                        "{cell}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

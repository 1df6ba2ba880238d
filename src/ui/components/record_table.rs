use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::domain::entities::record::{Record, TableRow};
use crate::ui::components::styles::{
    table_cell_style, table_container_style, table_header_cell_style,
};

/// One rendered table row keyed by record id.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRowView {
    pub id: String,
    pub cells: Vec<String>,
}

impl TableRowView {
    pub fn from_record<T: Record + TableRow>(record: &T) -> Self {
        Self {
            id: record.id().to_string(),
            cells: record.cells(),
        }
    }
}

#[component]
pub fn RecordTable(
    columns: Vec<String>,
    rows: Vec<TableRowView>,
    selected: BTreeSet<String>,
    on_toggle: EventHandler<(String, bool)>,
    on_toggle_all: EventHandler<bool>,
    on_open: EventHandler<String>,
) -> Element {
    let all_selected = !rows.is_empty() && rows.iter().all(|row| selected.contains(&row.id));
    let column_count = columns.len() + 2;

    rsx! {
        div {
            style: "{table_container_style()}",
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        th { style: "{table_header_cell_style()}",
                            input {
                                r#type: "checkbox",
                                checked: all_selected,
                                onclick: move |_| on_toggle_all.call(!all_selected),
                            }
                        }
                        for header in columns.iter() {
                            th { style: "{table_header_cell_style()}", "{header}" }
                        }
                        th { style: "{table_header_cell_style()}", "" }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 16px; text-align: center; color: #888;",
                                "No records match the current filters."
                            }
                        }
                    }
                    {rows.iter().map(|row| {
                        let is_selected = selected.contains(&row.id);
                        let row_style = if is_selected { "background: #eef4ff;" } else { "" };
                        let id_for_toggle = row.id.clone();
                        let id_for_open = row.id.clone();
                        let cells = row.cells.clone();
                        rsx!(
                            tr { key: "{row.id}", style: "{row_style}",
                                td { style: "{table_cell_style()}",
                                    input {
                                        r#type: "checkbox",
                                        checked: is_selected,
                                        onchange: move |event| {
                                            let checked = event.value().parse::<bool>().unwrap_or(!is_selected);
                                            on_toggle.call((id_for_toggle.clone(), checked));
                                        }
                                    }
                                }
                                for cell in cells.iter() {
                                    td { style: "{table_cell_style()}", "{cell}" }
                                }
                                td { style: "{table_cell_style()}",
                                    button {
                                        style: "border: none; background: none; color: #2a5db0; cursor: pointer;",
                                        onclick: move |_| on_open.call(id_for_open.clone()),
                                        "Details"
                                    }
                                }
                            }
                        )
                    })}
                }
            }
        }
    }
}

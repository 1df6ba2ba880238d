use std::collections::BTreeSet;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::app::{Revision, Services};
use crate::domain::entities::record::{Record, TableRow};
use crate::domain::entities::user::Department;
use crate::platform::desktop::blocking::run_blocking;
use crate::ui::components::controls::{Pager, RangeInputs, SortControls};
use crate::ui::components::detail_panel::DetailPanel;
use crate::ui::components::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::components::record_table::{RecordTable, TableRowView};
use crate::ui::components::styles::{button_style, toolbar_style};
use crate::ui::state::list_state::{ListState, RangeDef};
use crate::usecase::ports::repo::{BulkOperation, Collection, RepoError};
use crate::usecase::services::query_service::run_query;

/// A categorical filter dropdown; `options` excludes the "all" entry.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterDef {
    pub field: &'static str,
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
}

/// What a list page shows for one record kind.
pub trait ListPage: Collection + TableRow + PartialEq + 'static {
    fn filters(departments: &[Department]) -> Vec<FilterDef>;

    fn ranges() -> &'static [RangeDef] {
        &[]
    }

    /// `(field, label)` pairs offered in the sort dropdown.
    fn sort_fields() -> &'static [(&'static str, &'static str)];

    fn bulk_operations() -> &'static [BulkOperation] {
        &[BulkOperation::Delete, BulkOperation::Export]
    }
}

pub fn enum_options<S: Copy>(
    all: &[S],
    value: fn(S) -> &'static str,
    label: fn(S) -> &'static str,
) -> Vec<DropdownOption> {
    all.iter()
        .map(|item| DropdownOption::new(value(*item), label(*item)))
        .collect()
}

pub fn department_filter(departments: &[Department]) -> FilterDef {
    FilterDef {
        field: "department_id",
        label: "Department",
        options: departments
            .iter()
            .map(|dept| DropdownOption::new(dept.id.clone(), dept.name.clone()))
            .collect(),
    }
}

fn confirm(operation: BulkOperation, kind_label: &str, count: usize) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(format!("Confirm {operation}"))
        .set_description(format!(
            "Apply '{operation}' to {count} selected {kind_label} record(s)?"
        ))
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

/// Search, filter, sort and page one collection, with bulk actions on the
/// selected rows.
pub fn list_view<T: ListPage>() -> Element {
    let services = use_context::<Services>();
    let Revision(mut revision) = use_context::<Revision>();
    let state = ListState::new(services.config.default_page_size);
    let ListState {
        mut search,
        mut filters,
        mut range_inputs,
        mut sort_field,
        mut sort_direction,
        mut page,
        mut page_size,
        mut selected,
        mut status,
        mut detail,
    } = state;

    let mut records = use_signal(Vec::<T>::new);
    let mut departments = use_signal(Vec::<Department>::new);

    let query_for_load = services.query.clone();
    use_effect(move || {
        let current = revision();
        let loaded = run_blocking("load_records", || {
            let items = query_for_load.list::<T>()?;
            let depts = query_for_load.list::<Department>()?;
            Ok::<_, RepoError>((items, depts))
        });
        match loaded {
            Ok((items, depts)) => {
                records.set(items);
                departments.set(depts);
                if current == 0 {
                    status.set(format!("Loaded {}", T::KIND.label()));
                }
            }
            Err(err) => {
                records.set(Vec::new());
                status.set(format!("Failed to load {}: {err}", T::KIND.label()));
            }
        }
    });

    let controls = state.controls();
    let spec = controls.to_spec(T::ranges());
    let result = run_query(records.read().as_slice(), &spec);
    let export_spec = spec.clone().with_page(0).with_page_size(usize::MAX);

    let columns: Vec<String> = T::columns().iter().map(|col| col.to_string()).collect();
    let rows: Vec<TableRowView> = result.items.iter().map(TableRowView::from_record).collect();
    let page_ids: Vec<String> = rows.iter().map(|row| row.id.clone()).collect();
    let selected_snapshot: BTreeSet<String> = selected();
    let selected_count = selected_snapshot.len();
    let filter_defs = T::filters(&departments.read());
    let sort_options: Vec<DropdownOption> = T::sort_fields()
        .iter()
        .map(|(field, label)| DropdownOption::new(*field, *label))
        .collect();
    let kind_label = T::KIND.label();
    let page_label = format!("page {} ({} total)", result.page_label(), result.total_count);

    let detail_view = detail().map(|id| {
        let query_for_detail = services.query.clone();
        match run_blocking("get_record", || query_for_detail.get::<T>(&id)) {
            Ok(Some(record)) => {
                let fields = T::columns()
                    .iter()
                    .map(|col| col.to_string())
                    .zip(record.cells())
                    .collect::<Vec<_>>();
                (format!("{} · {}", T::KIND.label(), record.id()), fields)
            }
            Ok(None) => (format!("{id} not found"), Vec::new()),
            Err(err) => (format!("Failed to load {id}"), vec![("error".to_string(), err.to_string())]),
        }
    });

    rsx! {
        div {
            style: "{toolbar_style()}",
            input {
                style: "padding: 4px 8px; min-width: 220px;",
                placeholder: "Search {kind_label}…",
                value: "{search}",
                oninput: move |event| {
                    search.set(event.value());
                    page.set(0);
                },
            }
            {filter_defs.into_iter().map(|def| {
                let field = def.field;
                let mut options = vec![DropdownOption::all()];
                options.extend(def.options);
                let current = filters.read().get(field).cloned();
                rsx!(
                    DropdownSelect {
                        key: "{field}",
                        label: def.label.to_string(),
                        options,
                        selected: Some(current.unwrap_or_else(|| DropdownOption::all().value)),
                        on_select: move |value: String| {
                            filters.write().insert(field.to_string(), value);
                            page.set(0);
                        },
                    }
                )
            })}
            SortControls {
                fields: sort_options,
                selected: sort_field(),
                direction: sort_direction(),
                on_field: move |field: Option<String>| {
                    sort_field.set(field);
                    page.set(0);
                },
                on_toggle_direction: move |_| {
                    let next = sort_direction().toggled();
                    sort_direction.set(next);
                },
            }
        }

        if !T::ranges().is_empty() {
            div {
                style: "{toolbar_style()}",
                {T::ranges().iter().map(|def| {
                    let field = def.field;
                    let (min, max) = range_inputs.read().get(field).cloned().unwrap_or_default();
                    rsx!(
                        RangeInputs {
                            key: "{field}",
                            label: def.label.to_string(),
                            input_type: def.input_type().to_string(),
                            min,
                            max,
                            on_change: move |bounds: (String, String)| {
                                range_inputs.write().insert(field.to_string(), bounds);
                                page.set(0);
                            },
                        }
                    )
                })}
            }
        }

        div {
            style: "display: flex; gap: 8px; align-items: center; margin: 4px 0 8px;",
            span { style: "color: #555;", "{selected_count} selected" }
            {T::bulk_operations().iter().copied().map(|operation| {
                let bulk = services.bulk.clone();
                let export_spec = export_spec.clone();
                let enabled = selected_count > 0 || !operation.is_mutation();
                rsx!(
                    button {
                        key: "{operation}",
                        style: "{button_style(enabled)}",
                        disabled: !enabled,
                        onclick: move |_| {
                            let ids: Vec<String> = selected.read().iter().cloned().collect();

                            if !operation.is_mutation() {
                                let Some(path) = FileDialog::new()
                                    .add_filter("CSV", &["csv"])
                                    .set_file_name(format!("{}.csv", T::KIND.as_str()))
                                    .save_file()
                                else {
                                    return;
                                };
                                let source: Vec<T> = if ids.is_empty() {
                                    run_query(records.read().as_slice(), &export_spec).items
                                } else {
                                    records.read().clone()
                                };
                                let exported = run_blocking("export_csv", || bulk.export(&source, &ids, &path));
                                match exported {
                                    Ok(ack) => status.set(format!("{ack} -> {}", path.display())),
                                    Err(err) => status.set(format!("Export failed: {err:#}")),
                                }
                                return;
                            }

                            if ids.is_empty() {
                                status.set("Select at least one record first".to_string());
                                return;
                            }
                            if !confirm(operation, kind_label, ids.len()) {
                                return;
                            }
                            match run_blocking("bulk_mutate", || bulk.apply(T::KIND, operation, &ids)) {
                                Ok(ack) => {
                                    status.set(ack.to_string());
                                    selected.write().clear();
                                    *revision.write() += 1;
                                }
                                Err(err) => status.set(format!("{operation} failed: {err}")),
                            }
                        },
                        "{operation}"
                    }
                )
            })}
            if selected_count > 0 {
                button {
                    style: "{button_style(true)}",
                    onclick: move |_| selected.write().clear(),
                    "Clear selection"
                }
            }
        }

        RecordTable {
            columns,
            rows,
            selected: selected_snapshot,
            on_toggle: move |(id, checked): (String, bool)| {
                if checked {
                    selected.write().insert(id);
                } else {
                    selected.write().remove(&id);
                }
            },
            on_toggle_all: move |checked: bool| {
                let mut next = selected.write();
                for id in page_ids.iter() {
                    if checked {
                        next.insert(id.clone());
                    } else {
                        next.remove(id);
                    }
                }
            },
            on_open: move |id: String| detail.set(Some(id)),
        }

        Pager {
            label: page_label,
            has_previous: result.has_previous(),
            has_next: result.has_next(),
            page_size: page_size(),
            on_previous: move |_| {
                let current = page();
                page.set(current.saturating_sub(1));
            },
            on_next: move |_| {
                let current = page();
                page.set(current + 1);
            },
            on_page_size: move |size: usize| {
                page_size.set(size);
                page.set(0);
            },
        }

        p { style: "margin: 4px 0; color: #444;", "{status}" }

        if let Some((title, fields)) = detail_view {
            DetailPanel {
                title,
                fields,
                on_close: move |_| detail.set(None),
            }
        }
    }
}

use dioxus::prelude::*;

use crate::domain::query::spec::PAGE_SIZE_OPTIONS;
use crate::domain::query::SortDirection;
use crate::ui::components::dropdown::{DropdownOption, DropdownSelect};
use crate::ui::components::styles::button_style;

#[component]
pub fn RangeInputs(
    label: String,
    input_type: String,
    min: String,
    max: String,
    on_change: EventHandler<(String, String)>,
) -> Element {
    let max_for_min = max.clone();
    let min_for_max = min.clone();

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 4px;",
            span { "{label}" }
            input {
                r#type: "{input_type}",
                style: "width: 120px;",
                placeholder: "min",
                value: "{min}",
                oninput: move |event| on_change.call((event.value(), max_for_min.clone())),
            }
            span { "to" }
            input {
                r#type: "{input_type}",
                style: "width: 120px;",
                placeholder: "max",
                value: "{max}",
                oninput: move |event| on_change.call((min_for_max.clone(), event.value())),
            }
        }
    }
}

#[component]
pub fn SortControls(
    fields: Vec<DropdownOption>,
    selected: Option<String>,
    direction: SortDirection,
    on_field: EventHandler<Option<String>>,
    on_toggle_direction: EventHandler<()>,
) -> Element {
    let mut options = vec![DropdownOption::new("", "(unsorted)")];
    options.extend(fields);
    let arrow = match direction {
        SortDirection::Asc => "↑",
        SortDirection::Desc => "↓",
    };
    let direction_label = format!("{arrow} {}", direction.as_str());

    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 6px;",
            DropdownSelect {
                label: "Sort by".to_string(),
                options,
                selected: Some(selected.clone().unwrap_or_default()),
                on_select: move |value: String| {
                    on_field.call(if value.is_empty() { None } else { Some(value) });
                },
            }
            button {
                style: "{button_style(selected.is_some())}",
                disabled: selected.is_none(),
                onclick: move |_| on_toggle_direction.call(()),
                "{direction_label}"
            }
        }
    }
}

#[component]
pub fn Pager(
    label: String,
    has_previous: bool,
    has_next: bool,
    page_size: usize,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
    on_page_size: EventHandler<usize>,
) -> Element {
    let size_options: Vec<DropdownOption> = PAGE_SIZE_OPTIONS
        .iter()
        .map(|size| DropdownOption::new(size.to_string(), format!("{size} / page")))
        .collect();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center; margin: 8px 0;",
            button {
                style: "{button_style(has_previous)}",
                disabled: !has_previous,
                onclick: move |_| on_previous.call(()),
                "Previous"
            }
            span { "{label}" }
            button {
                style: "{button_style(has_next)}",
                disabled: !has_next,
                onclick: move |_| on_next.call(()),
                "Next"
            }
            DropdownSelect {
                label: "Page size".to_string(),
                options: size_options,
                selected: Some(page_size.to_string()),
                on_select: move |value: String| {
                    if let Ok(size) = value.parse::<usize>() {
                        on_page_size.call(size);
                    }
                },
            }
        }
    }
}

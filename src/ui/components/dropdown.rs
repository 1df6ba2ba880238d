use dioxus::prelude::*;

use crate::domain::query::spec::ALL_SENTINEL;
use crate::ui::components::styles::button_style;

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The "no constraint" entry heading every filter dropdown.
    pub fn all() -> Self {
        Self::new(ALL_SENTINEL, "All")
    }
}

pub fn dropdown_label(options: &[DropdownOption], selected: Option<&str>) -> String {
    selected
        .and_then(|value| options.iter().find(|opt| opt.value == value))
        .map(|opt| opt.label.clone())
        .unwrap_or_else(|| "(none)".to_string())
}

#[component]
pub fn DropdownSelect(
    label: String,
    options: Vec<DropdownOption>,
    selected: Option<String>,
    on_select: EventHandler<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let mut position = use_signal(|| (0.0_f64, 0.0_f64));
    let selected_label = dropdown_label(&options, selected.as_deref());
    let (left, top) = position();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: "{button_style(true)}",
                onclick: move |event| {
                    event.stop_propagation();
                    if open() {
                        open.set(false);
                        return;
                    }
                    let point = event.client_coordinates();
                    position.set((point.x, point.y + 24.0));
                    open.set(true);
                },
                "{selected_label}"
            }
        }

        if open() {
            div {
                style: "position: fixed; inset: 0; z-index: 1100;",
                onclick: move |_| open.set(false),
            }
            div {
                style: "position: fixed; left: {left}px; top: {top}px; min-width: 180px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200;",
                onclick: move |event| event.stop_propagation(),
                {options.iter().map(|opt| {
                    let value = opt.value.clone();
                    let label = opt.label.clone();
                    let is_selected = selected.as_deref() == Some(value.as_str());
                    let background = if is_selected { "#eef4ff" } else { "transparent" };
                    rsx!(
                        div {
                            key: "{value}",
                            style: "padding: 8px 10px; cursor: pointer; background: {background};",
                            onclick: move |_| {
                                on_select.call(value.clone());
                                open.set(false);
                            },
                            "{label}"
                        }
                    )
                })}
            }
        }
    }
}

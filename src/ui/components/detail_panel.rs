use dioxus::prelude::*;

#[component]
pub fn DetailPanel(title: String, fields: Vec<(String, String)>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; right: 0; bottom: 0; width: 360px; background: #fff; border-left: 1px solid #bbb; box-shadow: -8px 0 24px rgba(0,0,0,0.12); padding: 16px; overflow-y: auto; z-index: 1000;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "{title}" }
                button {
                    style: "border: none; background: none; font-size: 18px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            dl {
                for (name, value) in fields.iter() {
                    dt { style: "font-size: 12px; color: #666; margin-top: 10px;", "{name}" }
                    dd { style: "margin: 2px 0 0;", "{value}" }
                }
            }
        }
    }
}

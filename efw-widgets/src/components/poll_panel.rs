use dioxus::prelude::*;
use efw_core::poll_panel::{PollPanels, INVISIBLE_CLASS, ROTATE_CLASS};

#[derive(Props, Clone, PartialEq)]
pub struct PollPanelProps {
    /// Key for the open/closed state, also the trigger's id
    pub id: String,
    pub title: String,
    pub children: Element,
}

/// Collapsible block with a rotating arrow trigger. Starts collapsed.
#[component]
pub fn PollPanel(props: PollPanelProps) -> Element {
    let mut panels = use_signal(PollPanels::new);
    let expanded = panels.read().is_expanded(&props.id);
    let trigger_class = if expanded { ROTATE_CLASS } else { "" };
    let block_class = if expanded { "" } else { INVISIBLE_CLASS };
    let block_display = if expanded { "block" } else { "none" };

    let key = props.id.clone();
    let on_click = move |_| {
        panels.write().toggle(&key);
    };

    rsx! {
        div {
            class: "poll_panel",
            h3 {
                style: "cursor: pointer; margin: 8px 0;",
                onclick: on_click,
                span { id: "{props.id}", class: "arrow {trigger_class}", "▸ " }
                "{props.title}"
            }
            div {
                class: "{block_class}",
                style: "display: {block_display};",
                {props.children}
            }
        }
    }
}

use crate::state::MeterState;
use dioxus::prelude::*;
use efw_core::ticks::{range_ticks, TICK_CLASS};

/// Labels under the slider, from R+10 to D+10.
#[component]
pub fn RangeTicks() -> Element {
    let state = use_context::<MeterState>();
    let ticks_id = state.config.read().ticks_id.clone();

    rsx! {
        div {
            id: "{ticks_id}",
            style: "display: flex; justify-content: space-between; font-size: 11px; color: #666;",
            for (offset, label) in range_ticks() {
                span { key: "{offset}", class: TICK_CLASS, "{label}" }
            }
        }
    }
}

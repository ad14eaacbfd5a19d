//! Placeholder meter shown while the roster loads.

use crate::state::MeterState;
use dioxus::prelude::*;

/// A disabled slider at the configured bounds, so the page keeps its shape
/// until the real rows arrive.
#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<MeterState>();
    let config = (state.config)();
    let total_evs = (state.total_evs)();

    rsx! {
        div {
            class: "swing_control loading",
            style: "color: #666;",
            label { "Polling error: None" }
            input {
                r#type: "range",
                min: "{config.slider_min}",
                max: "{config.slider_max}",
                value: "0",
                disabled: true,
                style: "width: 100%;",
            }
            p {
                style: "text-align: center; padding: 24px;",
                "Loading state roster ({total_evs} EVs)..."
            }
        }
    }
}

//! Slider selecting a uniform polling error.

use crate::components::RangeTicks;
use crate::state::MeterState;
use dioxus::prelude::*;

/// Range input for the swing, with the current swing label and ticks below.
#[component]
pub fn SwingSlider() -> Element {
    let mut state = use_context::<MeterState>();
    let config = (state.config)();
    let raw = (state.slider_raw)();
    let label = state.swing().label();
    let (min, max) = (config.slider_min, config.slider_max);

    let on_input = move |evt: Event<FormData>| {
        if let Ok(value) = evt.value().parse::<i32>() {
            state.slider_raw.set(value.clamp(min, max));
        }
    };

    rsx! {
        div {
            class: "swing_control",
            label {
                r#for: "{config.slider_id}",
                "Polling error: "
                span { id: "{config.swing_label_id}", "{label}" }
            }
            input {
                id: "{config.slider_id}",
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{config.slider_step}",
                value: "{raw}",
                style: "width: 100%;",
                oninput: on_input,
            }
            RangeTicks {}
        }
    }
}

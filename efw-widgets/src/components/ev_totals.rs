//! Electoral vote totals under the current swing.

use crate::state::MeterState;
use dioxus::prelude::*;
use efw_core::swing::{apply_swing, tiebreaker_majority};

#[derive(Props, Clone, PartialEq)]
pub struct EvTotalsLineProps {
    /// Democratic candidate name
    #[props(default = "D".to_string())]
    pub dem_name: String,
    /// Republican candidate name
    #[props(default = "R".to_string())]
    pub gop_name: String,
}

/// One-line summary: Democratic, Republican, and tied electoral votes.
#[component]
pub fn EvTotalsLine(props: EvTotalsLineProps) -> Element {
    let state = use_context::<MeterState>();
    let config = (state.config)();
    let total_evs = (state.total_evs)();
    let totals = apply_swing(&state.rows.read(), state.swing(), total_evs).totals;
    let majority = tiebreaker_majority(total_evs);

    rsx! {
        div {
            class: "ev_line",
            style: "margin: 8px 0; font-weight: bold;",
            span { class: "dem", "{props.dem_name}: " span { id: "{config.dem_evs_id}", "{totals.dem}" } }
            " · "
            span { class: "gop", "{props.gop_name}: " span { id: "{config.gop_evs_id}", "{totals.gop}" } }
            " · "
            span { class: "tie", "Tied: " span { id: "{config.tie_evs_id}", "{totals.tie}" } }
            span {
                style: "font-weight: normal; color: #666; margin-left: 12px;",
                "({majority} to win)"
            }
        }
    }
}

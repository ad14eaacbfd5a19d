//! Swing Meter
//!
//! Shows how the electoral map changes if every state's polls are off by
//! the same amount. Dragging the slider shifts all margins, recolors the
//! margin table, and retotals electoral votes.
//!
//! Data flow:
//! 1. `build.rs` copies `states.csv` and `forecast.json` into `OUT_DIR`.
//! 2. `include_str!` embeds both into the WASM binary.
//! 3. On mount: parse the roster into `MeterState.rows`.
//! 4. On slider input: components recompute from the baseline rows.

use dioxus::prelude::*;
use efw_core::roster::{load_state_rows, total_evs};
use efw_core::ForecastError;
use efw_widgets::components::{
    roster_error_hint, ErrorDisplay, EvTotalsLine, LoadingSpinner, OddsBadge, PollPanel,
    StateMarginTable, SwingSlider, EMPTY_ROSTER_HINT,
};
use efw_widgets::state::MeterState;
use serde::Deserialize;

const STATES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/states.csv"));
const FORECAST_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/forecast.json"));

/// Headline numbers shown above the meter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
struct Forecast {
    year: i32,
    dem_name: String,
    gop_name: String,
    dem_win_pct: f64,
    rating: String,
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("swing-meter-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(MeterState::new);
    let mut forecast: Signal<Option<Forecast>> = use_signal(|| None);

    // Load the roster once on mount
    use_effect(move || {
        match serde_json::from_str::<Forecast>(FORECAST_JSON) {
            Ok(f) => forecast.set(Some(f)),
            Err(e) => log::warn!("swing meter: bad forecast.json: {e}"),
        }

        match load_state_rows(STATES_CSV) {
            Ok(rows) if rows.is_empty() => {
                state.error_msg.set(Some("No states in roster.".to_string()));
                state.error_hint.set(Some(EMPTY_ROSTER_HINT.to_string()));
            }
            Ok(rows) => {
                let roster_evs = total_evs(&rows);
                let configured = state.config.read().total_evs;
                if roster_evs != configured {
                    log::warn!(
                        "swing meter: roster has {roster_evs} EVs, expected {configured}"
                    );
                }
                state.total_evs.set(roster_evs);
                state.rows.set(rows);
            }
            Err(e) => {
                log::error!("Failed to load states: {e}");
                state.error_msg.set(Some(format!("Failed to load states: {e}")));
                state
                    .error_hint
                    .set(Some(roster_error_hint(e.downcast_ref::<ForecastError>())));
            }
        }
        state.loading.set(false);
    });

    let loading = (state.loading)();
    let error = (state.error_msg)();
    let hint = (state.error_hint)();
    let headline = forecast();

    rsx! {
        div {
            style: "font-family: sans-serif; max-width: 720px; margin: 0 auto; padding: 16px;",
            h2 {
                if let Some(f) = &headline {
                    "{f.year} Swing Meter"
                } else {
                    "Swing Meter"
                }
            }
            if let Some(f) = headline.clone() {
                p {
                    "Chance of a {f.dem_name} win: "
                    OddsBadge {
                        id: "headline_odds".to_string(),
                        dem_win_pct: f.dem_win_pct,
                        rating: f.rating.clone(),
                    }
                }
            }
            if let Some(msg) = error {
                ErrorDisplay { message: msg, hint }
            } else if loading {
                LoadingSpinner {}
            } else {
                SwingSlider {}
                if let Some(f) = headline {
                    EvTotalsLine { dem_name: f.dem_name, gop_name: f.gop_name }
                } else {
                    EvTotalsLine {}
                }
                PollPanel {
                    id: "margin_table_toggle".to_string(),
                    title: "State margins".to_string(),
                    StateMarginTable {}
                }
            }
        }
    }
}

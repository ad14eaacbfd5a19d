//! DOM bindings and Dioxus components for election forecast widgets.
//!
//! This crate provides:
//! - `dom`: small helpers over `web_sys` element lookup and mutation
//! - `odds_toggle`, `poll_panel`, `ticks`, `swing_meter`: `#[wasm_bindgen]`
//!   exports driven by the markup of a server-rendered forecast page
//! - `state`: reactive `MeterState` with Dioxus Signals
//! - `components`: reusable RSX components for the swing meter app

pub mod components;
pub mod dom;
pub mod error;
pub mod odds_toggle;
pub mod poll_panel;
pub mod state;
pub mod swing_meter;
pub mod ticks;

pub use error::WidgetError;

use wasm_bindgen::prelude::*;

/// Install the console logger. Call once before using the other exports.
#[wasm_bindgen]
pub fn init() {
    if let Err(e) = dioxus_logger::init(dioxus_logger::tracing::Level::INFO) {
        web_sys::console::warn_1(&format!("efw: logger already installed: {e}").into());
    }
}

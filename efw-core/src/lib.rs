//! Core types and display logic for election forecast widgets.
//!
//! Everything in this crate is target independent: it compiles for the
//! native CLI and for `wasm32-unknown-unknown` alike. The browser bindings in
//! `efw-widgets` only translate between these types and the live DOM.
//!
//! - `odds`: the rating / percent / fraction cycle for win probabilities
//! - `margin`: tie detection, clamping, and the color threshold tables
//! - `swing`: uniform swing applied to every state row, EV totals, tipping line
//! - `rating`: pundit rating strings ("leans dem") to labels and classes
//! - `ticks`: labels for the slider range ticks
//! - `poll_panel`: expand/collapse state for poll panels
//! - `roster`: state roster CSV loading
//! - `config`: element ids and slider bounds for the meter page

pub mod config;
pub mod error;
pub mod margin;
pub mod odds;
pub mod poll_panel;
pub mod rating;
pub mod roster;
pub mod swing;
pub mod ticks;

pub use error::ForecastError;

//! Meter state managed via Dioxus context.
//!
//! `MeterState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<MeterState>()`.

use dioxus::prelude::*;
use efw_core::config::MeterConfig;
use efw_core::swing::{StateRow, Swing};

/// Shared state for the swing meter app.
#[derive(Clone, Copy)]
pub struct MeterState {
    /// Baseline state rows, in roster order
    pub rows: Signal<Vec<StateRow>>,
    /// Raw slider position (twice the swing in points)
    pub slider_raw: Signal<i32>,
    /// Grand total of electoral votes
    pub total_evs: Signal<u32>,
    /// Element ids and slider bounds
    pub config: Signal<MeterConfig>,
    /// Whether the roster is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Suggested fix shown with the error
    pub error_hint: Signal<Option<String>>,
}

impl MeterState {
    /// Create a new MeterState with default signal values.
    pub fn new() -> Self {
        let config = MeterConfig::default();
        Self {
            rows: Signal::new(Vec::new()),
            slider_raw: Signal::new(0),
            total_evs: Signal::new(config.total_evs),
            config: Signal::new(config),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            error_hint: Signal::new(None),
        }
    }

    /// Swing selected by the slider.
    pub fn swing(&self) -> Swing {
        Swing::from_slider(f64::from((self.slider_raw)()))
    }
}

//! Reusable Dioxus RSX components for the swing meter app.

mod error_display;
mod ev_totals;
mod loading_spinner;
mod odds_badge;
mod poll_panel;
mod range_ticks;
mod state_margin_table;
mod swing_slider;

pub use error_display::{roster_error_hint, ErrorDisplay, EMPTY_ROSTER_HINT};
pub use ev_totals::EvTotalsLine;
pub use loading_spinner::LoadingSpinner;
pub use odds_badge::OddsBadge;
pub use poll_panel::PollPanel;
pub use range_ticks::RangeTicks;
pub use state_margin_table::StateMarginTable;
pub use swing_slider::SwingSlider;

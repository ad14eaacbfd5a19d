//! Click handler for probability cells.
//!
//! The page renders each cell with its rating text and wires
//! `toggle_percent(this, <p_dem>)` to its click event.

use crate::dom::element_key;
use crate::error::WidgetError;
use efw_core::odds::{OddsMode, OddsToggle, WinProbability};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::Element;

thread_local! {
    static ODDS: RefCell<OddsToggle> = RefCell::new(OddsToggle::new());
}

/// Advance a probability cell to its next display mode.
#[wasm_bindgen]
pub fn toggle_percent(span: &Element, pct_value: f64) -> Result<(), JsValue> {
    advance_cell(span, pct_value)?;
    Ok(())
}

pub fn advance_cell(span: &Element, pct_value: f64) -> Result<OddsMode, WidgetError> {
    let p = WinProbability::new(pct_value)?;
    let key = element_key(span, "efw_odds");
    let current = span.text_content().unwrap_or_default();
    let (text, mode) = ODDS.with(|odds| {
        let mut odds = odds.borrow_mut();
        let text = odds.advance(&key, &current, p);
        (text, odds.mode(&key))
    });
    span.set_text_content(Some(&text));
    Ok(mode)
}

//! Tick labels under the swing slider.

use crate::error::WidgetError;
use efw_core::ticks::{range_ticks, TICK_CLASS};
use wasm_bindgen::prelude::*;
use web_sys::Element;

/// Append one `<span class="tick">` per range tick. Expects an empty container.
#[wasm_bindgen]
pub fn add_range_ticks(container: &Element) -> Result<(), JsValue> {
    append_range_ticks(container)?;
    Ok(())
}

pub fn append_range_ticks(container: &Element) -> Result<(), WidgetError> {
    let document = container.owner_document().ok_or(WidgetError::NoDocument)?;
    for (_, label) in range_ticks() {
        let span = document.create_element("span").map_err(WidgetError::from_js)?;
        span.set_text_content(Some(&label));
        span.set_attribute("class", TICK_CLASS).map_err(WidgetError::from_js)?;
        container.append_child(&span).map_err(WidgetError::from_js)?;
    }
    Ok(())
}

//! Show/hide the poll list under a race row.

use crate::dom::{document, element_by_id, element_key};
use crate::error::WidgetError;
use efw_core::poll_panel::{PanelState, PollPanels, INVISIBLE_CLASS, ROTATE_CLASS};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys::Element;

thread_local! {
    static PANELS: RefCell<PollPanels> = RefCell::new(PollPanels::new());
}

/// Toggle the poll block `block_id`, rotating the trigger's arrow.
#[wasm_bindgen]
pub fn expand_polls(trigger: &Element, block_id: &str) -> Result<(), JsValue> {
    let document = document()?;
    let block = element_by_id(&document, block_id)?;
    let key = element_key(trigger, "efw_polls");
    let state = PANELS.with(|panels| panels.borrow_mut().toggle(&key));
    apply_panel_state(trigger, &block, state)?;
    Ok(())
}

pub fn apply_panel_state(
    trigger: &Element,
    block: &Element,
    state: PanelState,
) -> Result<(), WidgetError> {
    let trigger_classes = trigger.class_list();
    let block_classes = block.class_list();
    if state.expanded {
        trigger_classes.add_1(ROTATE_CLASS).map_err(WidgetError::from_js)?;
        block_classes.remove_1(INVISIBLE_CLASS).map_err(WidgetError::from_js)?;
    } else {
        trigger_classes.remove_1(ROTATE_CLASS).map_err(WidgetError::from_js)?;
        block_classes.add_1(INVISIBLE_CLASS).map_err(WidgetError::from_js)?;
    }
    Ok(())
}

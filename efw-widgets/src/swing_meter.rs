//! Swing slider for the server-rendered meter page.
//!
//! The page emits one row per state:
//!
//! ```html
//! <tr id="state_4" data-code="CA" data-evs="54" data-margin="29.2">
//!   <td id="state_4_margin" class="dem">D+29.2</td>
//! </tr>
//! ```
//!
//! plus an SVG map whose shapes are keyed by state code, and three total
//! cells (`dem_evs`, `gop_evs`, `tie_evs`; the last carries `data-total`).
//! Rows are collected once when the meter is built; every slider tick then
//! rewrites all rows and totals from those baselines.

use crate::dom::{data_attr, document, element_by_id, set_text};
use crate::error::WidgetError;
use efw_core::config::MeterConfig;
use efw_core::swing::{apply_swing, EvTotals, StateRow, Swing};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement};

#[wasm_bindgen]
pub struct SwingMeter {
    config: MeterConfig,
    rows: Vec<StateRow>,
    total_evs: u32,
}

#[wasm_bindgen]
impl SwingMeter {
    /// Build a meter from the current document using the default element ids.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<SwingMeter, JsValue> {
        Ok(Self::from_document(MeterConfig::default())?)
    }

    /// Build a meter with element ids overridden by a JSON config.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<SwingMeter, JsValue> {
        let config = MeterConfig::from_json(config_json).map_err(WidgetError::from)?;
        Ok(Self::from_document(config)?)
    }

    #[wasm_bindgen(getter, js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[wasm_bindgen(getter, js_name = totalEvs)]
    pub fn total_evs(&self) -> u32 {
        self.total_evs
    }

    /// Apply the swing for a raw slider value and update the page.
    #[wasm_bindgen(js_name = onSliderChange)]
    pub fn on_slider_change(&self, raw_value: f64) -> Result<(), JsValue> {
        self.render(Swing::from_slider(raw_value))?;
        Ok(())
    }

    /// Listen for `input` events on the configured slider.
    ///
    /// The meter moves into the listener and lives as long as the page.
    pub fn attach(self) -> Result<(), JsValue> {
        let document = document()?;
        let slider_id = self.config.slider_id.clone();
        let slider = element_by_id(&document, &slider_id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| WidgetError::WrongElementType(slider_id.clone(), "input"))?;

        let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(raw) = slider_value(&event) else {
                log::warn!("swing meter: input event without a numeric slider value");
                return;
            };
            if let Err(e) = self.render(Swing::from_slider(raw)) {
                log::error!("swing meter: {e}");
            }
        });
        slider
            .add_event_listener_with_callback("input", handler.as_ref().unchecked_ref())
            .map_err(WidgetError::from_js)?;
        handler.forget();
        log::info!("swing meter attached to #{slider_id}");
        Ok(())
    }
}

impl SwingMeter {
    pub fn from_document(config: MeterConfig) -> Result<Self, WidgetError> {
        let document = document()?;
        let rows = read_rows(&document, &config)?;
        let total_evs = match document.get_element_by_id(&config.tie_evs_id) {
            Some(tie_cell) if tie_cell.has_attribute("data-total") => {
                data_attr(&tie_cell, "total")?
            }
            _ => config.total_evs,
        };
        log::info!("swing meter: {} states, {} total EVs", rows.len(), total_evs);
        Ok(Self::from_rows(config, rows, total_evs))
    }

    pub fn from_rows(config: MeterConfig, rows: Vec<StateRow>, total_evs: u32) -> Self {
        Self { config, rows, total_evs }
    }

    /// Rewrite the swing label, every row, and the totals.
    pub fn render(&self, swing: Swing) -> Result<EvTotals, WidgetError> {
        let document = document()?;
        let config = &self.config;

        set_text(&element_by_id(&document, &config.swing_label_id)?, &swing.label());

        let report = apply_swing(&self.rows, swing, self.total_evs);
        for outcome in &report.rows {
            let cell = element_by_id(&document, &config.margin_cell_id(outcome.id))?;
            cell.set_class_name(outcome.call.class());
            set_text(&cell, &outcome.call.text());

            // Pages without a map simply have no shapes to fill.
            if let Some(shape) = document.get_element_by_id(&outcome.code) {
                shape
                    .set_attribute("style", &outcome.call.fill_style())
                    .map_err(WidgetError::from_js)?;
            }
        }

        let totals = report.totals;
        set_text(&element_by_id(&document, &config.dem_evs_id)?, &totals.dem.to_string());
        set_text(&element_by_id(&document, &config.gop_evs_id)?, &totals.gop.to_string());
        set_text(&element_by_id(&document, &config.tie_evs_id)?, &totals.tie.to_string());
        Ok(totals)
    }
}

/// Collect the state rows in document order.
pub fn read_rows(document: &Document, config: &MeterConfig) -> Result<Vec<StateRow>, WidgetError> {
    let selector = format!("[id^='{}'][data-margin]", config.row_prefix);
    let nodes = document
        .query_selector_all(&selector)
        .map_err(WidgetError::from_js)?;

    let mut rows = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(id) = config.parse_row_id(&element.id()) else {
            continue;
        };
        let code: String = data_attr(&element, "code")?;
        let name = element
            .get_attribute("data-name")
            .unwrap_or_else(|| code.clone());
        rows.push(StateRow {
            id,
            code,
            name,
            evs: data_attr(&element, "evs")?,
            margin: data_attr(&element, "margin")?,
        });
    }
    Ok(rows)
}

fn slider_value(event: &Event) -> Option<f64> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let raw = input.value_as_number();
    if raw.is_nan() {
        input.value().trim().parse().ok()
    } else {
        Some(raw)
    }
}

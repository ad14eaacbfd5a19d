//! Meter page configuration: element ids and slider bounds.
//!
//! The defaults match the markup the page generator emits. A page can
//! override any of them with a JSON blob; missing fields keep their default.

use crate::error::ForecastError;
use crate::swing::DEFAULT_TOTAL_EVS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeterConfig {
    /// Raw slider minimum (twice the largest Republican swing).
    pub slider_min: i32,
    pub slider_max: i32,
    pub slider_step: i32,
    pub total_evs: u32,
    /// Prefix of each row id; the margin cell is `<prefix><id>_margin`.
    pub row_prefix: String,
    pub slider_id: String,
    pub swing_label_id: String,
    pub dem_evs_id: String,
    pub gop_evs_id: String,
    pub tie_evs_id: String,
    pub ticks_id: String,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            slider_min: -30,
            slider_max: 30,
            slider_step: 1,
            total_evs: DEFAULT_TOTAL_EVS,
            row_prefix: "state_".to_string(),
            slider_id: "swing_slider".to_string(),
            swing_label_id: "selected_error".to_string(),
            dem_evs_id: "dem_evs".to_string(),
            gop_evs_id: "gop_evs".to_string(),
            tie_evs_id: "tie_evs".to_string(),
            ticks_id: "range_ticks".to_string(),
        }
    }
}

impl MeterConfig {
    pub fn from_json(json: &str) -> Result<Self, ForecastError> {
        let config: MeterConfig =
            serde_json::from_str(json).map_err(|e| ForecastError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ForecastError> {
        if self.slider_min >= self.slider_max {
            return Err(ForecastError::InvalidConfig(format!(
                "slider_min {} must be below slider_max {}",
                self.slider_min, self.slider_max
            )));
        }
        if self.slider_step <= 0 {
            return Err(ForecastError::InvalidConfig(format!(
                "slider_step must be positive, got {}",
                self.slider_step
            )));
        }
        Ok(())
    }

    /// DOM id of a state row.
    pub fn row_id(&self, id: u32) -> String {
        format!("{}{}", self.row_prefix, id)
    }

    /// DOM id of a state row's margin cell.
    pub fn margin_cell_id(&self, id: u32) -> String {
        format!("{}{}_margin", self.row_prefix, id)
    }

    /// Parse a row id such as `state_12` back to its index.
    ///
    /// Margin cells (`state_12_margin`) and foreign ids yield `None`.
    pub fn parse_row_id(&self, dom_id: &str) -> Option<u32> {
        dom_id.strip_prefix(&self.row_prefix)?.parse().ok()
    }
}

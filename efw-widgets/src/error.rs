//! Error types for the DOM bindings.

use efw_core::ForecastError;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("window document not available")]
    NoDocument,

    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("element #{0} is not a {1}")]
    WrongElementType(String, &'static str),

    #[error("element #{id} has bad data-{attr}: {value:?}")]
    BadAttribute {
        id: String,
        attr: &'static str,
        value: Option<String>,
    },

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error(transparent)]
    Forecast(#[from] ForecastError),
}

impl WidgetError {
    pub fn from_js(value: JsValue) -> Self {
        WidgetError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<WidgetError> for JsValue {
    fn from(err: WidgetError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

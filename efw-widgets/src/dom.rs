//! Thin helpers over `web_sys` element lookup and mutation.

use crate::error::WidgetError;
use std::cell::Cell;
use std::str::FromStr;
use web_sys::{Document, Element};

thread_local! {
    static NEXT_KEY: Cell<u32> = const { Cell::new(0) };
}

pub fn document() -> Result<Document, WidgetError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(WidgetError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Result<Element, WidgetError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| WidgetError::MissingElement(id.to_string()))
}

pub fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Read and parse `data-<attr>`.
pub fn data_attr<T: FromStr>(element: &Element, attr: &'static str) -> Result<T, WidgetError> {
    let value = element.get_attribute(&format!("data-{attr}"));
    let parsed = value.as_deref().and_then(|v| v.trim().parse().ok());
    parsed.ok_or_else(|| WidgetError::BadAttribute { id: element.id(), attr, value })
}

/// Stable key for per-element widget state.
///
/// Uses the element id, assigning a fresh `<prefix>_<n>` id to elements
/// that have none.
pub fn element_key(element: &Element, prefix: &str) -> String {
    let id = element.id();
    if !id.is_empty() {
        return id;
    }
    let n = NEXT_KEY.with(|next| {
        let n = next.get();
        next.set(n + 1);
        n
    });
    let key = format!("{prefix}_{n}");
    element.set_id(&key);
    key
}

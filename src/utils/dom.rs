//! DOM and Web API utility functions.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Get the browser document.
#[inline]
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Look up an element by id as an `HtmlElement`.
pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

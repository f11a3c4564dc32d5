//! Element-lookup helpers shared by the glue modules. A missing element is
//! logged and reported as absent so each control degrades on its own.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub fn element_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let found = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        log::warn!("#{id} not found; control disabled");
    }
    found
}

pub fn query(document: &Document, selector: &str) -> Option<HtmlElement> {
    let found = document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if found.is_none() {
        log::warn!("{selector} not found; control disabled");
    }
    found
}

/// One-shot setTimeout; the callback is handed to the JS side and dropped
/// after it fires.
pub fn after_delay(ms: i32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = Closure::once_into_js(f);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), ms);
}

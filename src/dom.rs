//! DOM Helpers
//!
//! Thin wrappers over web-sys used by the handlers. JS exceptions are
//! flattened into `String` errors.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, HtmlElement};

pub fn js_err(e: JsValue) -> String {
    format!("{:?}", e)
}

pub fn query(root: &Element, selector: &str) -> Result<Option<Element>, String> {
    root.query_selector(selector).map_err(js_err)
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, String> {
    let list = root.query_selector_all(selector).map_err(js_err)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_html(root: &Element, selector: &str) -> Result<Vec<HtmlElement>, String> {
    Ok(query_all(root, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Attach `handler` for the page lifetime
pub fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static) -> Result<(), String>
where
    E: FromWasmAbi + 'static,
{
    let cb = Closure::<dyn FnMut(E)>::new(handler);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(js_err)?;
    cb.forget();
    Ok(())
}

pub fn text_of(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

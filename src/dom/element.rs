// ============================================================================
// ELEMENT HELPERS - Basic DOM access
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement, Window};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn set_class_name(element: &Element, class: &str) {
    element.set_class_name(class);
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_attribute(element: &Element, name: &str, value: &str) -> Result<(), JsValue> {
    element.set_attribute(name, value)
}

/// Drop every child node
pub fn clear_children(element: &Element) {
    element.set_inner_html("");
}

/// Replace the content of `container` with a single child
pub fn replace_children(container: &Element, child: &Element) -> Result<(), JsValue> {
    clear_children(container);
    append_child(container, child)
}

/// Current value of an `<input>` or `<select>`, empty if neither
pub fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

pub fn set_disabled(element: &Element, disabled: bool) {
    if let Some(button) = element.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_disabled(disabled);
    }
}

/// Blocking `window.alert`
pub fn alert(message: &str) {
    match window() {
        Some(win) => {
            if let Err(e) = win.alert_with_message(message) {
                log::error!("❌ [DOM] alert failed: {:?}", e);
            }
        }
        None => log::error!("❌ [DOM] No window for alert: {}", message),
    }
}

/// `location.pathname`, `/` when unavailable
pub fn current_path() -> String {
    window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `history.pushState` without reloading
pub fn push_history(path: &str) -> Result<(), JsValue> {
    let history = window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    history.push_state_with_url(&JsValue::NULL, "", Some(path))
}

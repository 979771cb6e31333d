// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))
        .and_then(|doc| doc.create_element(tag))
}

pub fn append_child(parent: &Element, child: &Element) -> Result<(), JsValue> {
    parent.append_child(child).map(|_| ())
}

pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// `display: none` / display por defecto
pub fn set_visible(element: &Element, visible: bool) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?;
    if visible {
        html.style().remove_property("display")?;
    } else {
        html.style().set_property("display", "none")?;
    }
    Ok(())
}

/// Añade o quita `class` según `on`
pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    element.class_list().toggle_with_force(class, on).map(|_| ())
}

/// Helper por id: no hace nada si el elemento no existe
pub fn set_visible_by_id(id: &str, visible: bool) -> Result<(), JsValue> {
    match get_element_by_id(id) {
        Some(element) => set_visible(&element, visible),
        None => Ok(()),
    }
}

pub fn set_text_by_id(id: &str, text: &str) {
    if let Some(element) = get_element_by_id(id) {
        set_text_content(&element, text);
    }
}

/// Cursor del body (crosshair mientras se marca basura)
pub fn set_body_cursor(cursor: &str) -> Result<(), JsValue> {
    if let Some(body) = document().and_then(|d| d.body()) {
        body.style().set_property("cursor", cursor)?;
    }
    Ok(())
}

pub fn query_selector(selector: &str) -> Result<Option<Element>, JsValue> {
    document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .query_selector(selector)
}

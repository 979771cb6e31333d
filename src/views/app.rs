// ============================================================================
// APP VIEW - Layout principal (Rust puro)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::app_state::AppState;
use crate::views::{render_dashboard, render_map_controls, render_modal_shell, render_role_selector};

/// Renderiza la app completa. Solo se llama una vez: el mapa vive dentro de #map
/// y el resto de cambios son incrementales.
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?.text("Cirkulær Madbod").build();
    let topbar = ElementBuilder::new("header")?
        .class("topbar")
        .child(title)?
        .child(render_role_selector(state)?)?
        .build();

    let map = ElementBuilder::new("div")?.id("map")?.build();

    Ok(ElementBuilder::new("div")?
        .class("app-shell")
        .child(topbar)?
        .child(map)?
        .child(render_map_controls(state)?)?
        .child(render_dashboard(state)?)?
        .child(render_modal_shell()?)?
        .build())
}

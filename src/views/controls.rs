// ============================================================================
// MAP CONTROLS VIEW - Heatmap, marcar basura, exportar, deshacer, rol
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlSelectElement};

use crate::config::CONFIG;
use crate::dom::{append_child, on_change, ElementBuilder};
use crate::models::Role;
use crate::services::export_reports;
use crate::state::app_state::AppState;

pub const HEAT_BUTTON_ID: &str = "toggleHeat";
pub const REPORT_BUTTON_ID: &str = "reportTrash";
pub const EXPORT_BUTTON_ID: &str = "exportReports";
pub const UNDO_BUTTON_ID: &str = "undoReport";
pub const ROLE_SELECT_ID: &str = "roleSel";

pub fn heat_button_label(heat_on: bool) -> String {
    format!("Heatmap: {}", if heat_on { "On" } else { "Off" })
}

/// Barra de botones sobre el mapa
pub fn render_map_controls(state: &AppState) -> Result<Element, JsValue> {
    let ctrl = ElementBuilder::new("div")?.class("map-ctrl").build();

    let heat_btn = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .id(HEAT_BUTTON_ID)?
            .text(&heat_button_label(state.is_heat_on()))
            .on_click(move |_e| {
                state.toggle_heat();
            })?
            .build()
    };

    let report_btn = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .id(REPORT_BUTTON_ID)?
            .text("Markér skrald")
            .on_click(move |_e| {
                state.arm_report();
            })?
            .build()
    };

    let export_btn = {
        let state = state.clone();
        ElementBuilder::new("button")?
            .id(EXPORT_BUTTON_ID)?
            .text("Eksportér rapporter")
            .on_click(move |_e| {
                let reports = state.reports.load_all();
                if let Err(e) = export_reports(&CONFIG.export_file_name, &reports) {
                    log::error!("❌ [EXPORT] {:?}", e);
                }
            })?
            .build()
    };

    append_child(&ctrl, &heat_btn)?;
    append_child(&ctrl, &report_btn)?;
    append_child(&ctrl, &export_btn)?;
    Ok(ctrl)
}

/// Botón "Fortryd markering" (se añade a .map-ctrl mientras hay ventana de deshacer)
pub fn render_undo_button(state: &AppState) -> Result<Element, JsValue> {
    let state = state.clone();
    Ok(ElementBuilder::new("button")?
        .id(UNDO_BUTTON_ID)?
        .class("undo")
        .text("Fortryd markering")
        .on_click(move |_e| {
            state.undo_last_report();
        })?
        .build())
}

pub fn render_role_selector(state: &AppState) -> Result<Element, JsValue> {
    let current = state.role();
    let select = ElementBuilder::new("select")?
        .id(ROLE_SELECT_ID)?
        .attr("aria-label", "Rolle")?
        .build();

    for role in Role::ALL {
        let mut option = ElementBuilder::new("option")?
            .attr("value", role.as_str())?
            .text(role.label());
        if role == current {
            option = option.attr("selected", "selected")?;
        }
        append_child(&select, &option.build())?;
    }

    let state = state.clone();
    on_change(&select, move |e: web_sys::Event| {
        let value = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            .map(|s| s.value());
        match value.as_deref().and_then(Role::parse) {
            Some(role) => state.set_role(role),
            None => log::warn!("⚠️ [ROLE] Valor de rol desconocido: {:?}", value),
        }
    })?;

    Ok(select)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_button_label() {
        assert_eq!(heat_button_label(true), "Heatmap: On");
        assert_eq!(heat_button_label(false), "Heatmap: Off");
    }
}

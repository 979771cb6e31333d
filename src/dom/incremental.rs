// ============================================================================
// INCREMENTAL UPDATES - Actualización directa del DOM sin re-render
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;

use crate::dom::{
    append_child, get_element_by_id, query_selector, set_body_cursor, set_inner_html,
    set_text_by_id, set_visible_by_id, toggle_class,
};
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::leaflet_ffi::set_arming_cursor;
use crate::viewmodels::MapViewModel;
use crate::views::controls::{
    EXPORT_BUTTON_ID, HEAT_BUTTON_ID, REPORT_BUTTON_ID, ROLE_SELECT_ID, UNDO_BUTTON_ID,
};
use crate::views::dashboard::DASHBOARD_ID;
use crate::views::{dashboard_html, heat_button_label, render_undo_button, update_like_actions};

pub fn apply_update(state: &AppState, update: IncrementalUpdate) -> Result<(), JsValue> {
    match update {
        IncrementalUpdate::StallMarkers => update_stall_markers(state),
        IncrementalUpdate::HeatLayer => update_heat_layer(state),
        IncrementalUpdate::Dashboard => update_dashboard(state),
        IncrementalUpdate::RoleControls => update_role_controls(state),
        IncrementalUpdate::ArmingCursor => update_arming_cursor(state),
        IncrementalUpdate::UndoButton => update_undo_button(state),
        IncrementalUpdate::StallLikes(stall_id) => update_like_actions(state, &stall_id),
    }
}

fn update_stall_markers(state: &AppState) -> Result<(), JsValue> {
    if let Some(dataset) = state.dataset.borrow().as_ref() {
        MapViewModel::update_stall_markers(&dataset.stalls);
    }
    Ok(())
}

fn update_heat_layer(state: &AppState) -> Result<(), JsValue> {
    let heat_on = state.is_heat_on();
    let points = state.heat_points();
    log::info!("🔥 [HEAT] {} puntos (visible: {})", points.len(), heat_on);
    MapViewModel::update_heat_layer(&points, heat_on);
    set_text_by_id(HEAT_BUTTON_ID, &heat_button_label(heat_on));
    Ok(())
}

fn update_dashboard(state: &AppState) -> Result<(), JsValue> {
    let Some(dash) = get_element_by_id(DASHBOARD_ID) else {
        return Ok(());
    };
    set_inner_html(&dash, &dashboard_html(state.dashboard_totals().as_ref(), state.report_count()));
    toggle_class(&dash, "hidden", !state.role().visibility().dashboard)
}

/// Aplica la tabla de visibilidad del rol actual
pub fn update_role_controls(state: &AppState) -> Result<(), JsValue> {
    let role = state.role();
    let visibility = role.visibility();

    set_visible_by_id(HEAT_BUTTON_ID, visibility.heat_toggle)?;
    set_visible_by_id(REPORT_BUTTON_ID, visibility.report_button)?;
    set_visible_by_id(EXPORT_BUTTON_ID, visibility.export)?;
    if let Some(dash) = get_element_by_id(DASHBOARD_ID) {
        toggle_class(&dash, "hidden", !visibility.dashboard)?;
    }

    if let Some(select) =
        get_element_by_id(ROLE_SELECT_ID).and_then(|e| e.dyn_into::<HtmlSelectElement>().ok())
    {
        if select.value() != role.as_str() {
            select.set_value(role.as_str());
        }
    }
    Ok(())
}

fn update_arming_cursor(state: &AppState) -> Result<(), JsValue> {
    let armed = state.is_arming();
    set_arming_cursor(armed);
    set_body_cursor(if armed { "crosshair" } else { "default" })
}

fn update_undo_button(state: &AppState) -> Result<(), JsValue> {
    let existing = get_element_by_id(UNDO_BUTTON_ID);
    match (state.armed_report_id(), existing) {
        (Some(_), None) => {
            let ctrl = query_selector(".map-ctrl")?
                .ok_or_else(|| JsValue::from_str("No .map-ctrl element"))?;
            append_child(&ctrl, &render_undo_button(state)?)
        }
        (None, Some(button)) => {
            button.remove();
            Ok(())
        }
        _ => Ok(()),
    }
}

// ============================================================================
// STALL MODAL VIEW - Detalle de un puesto + like
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlButtonElement};

use crate::dom::{
    append_child, get_element_by_id, set_inner_html, set_text_by_id, toggle_class, ElementBuilder,
};
use crate::state::app_state::AppState;
use crate::viewmodels::{StallDetail, StallViewModel};

pub const MODAL_ID: &str = "modal";
pub const MODAL_CONTENT_ID: &str = "modalContent";
pub const MODAL_CLOSE_ID: &str = "closeModal";

/// Contenedor vacío del modal (oculto)
pub fn render_modal_shell() -> Result<Element, JsValue> {
    let content = ElementBuilder::new("div")?.id(MODAL_CONTENT_ID)?.build();
    let close_btn = ElementBuilder::new("button")?
        .id(MODAL_CLOSE_ID)?
        .class("close")
        .text("✕")
        .on_click(|_e| {
            if let Err(e) = close_modal() {
                log::warn!("⚠️ [MODAL] {:?}", e);
            }
        })?
        .build();

    let card = ElementBuilder::new("div")?
        .class("modal-card")
        .child(close_btn)?
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .id(MODAL_ID)?
        .class("modal hidden")
        .child(card)?
        .build())
}

pub fn close_modal() -> Result<(), JsValue> {
    if let Some(modal) = get_element_by_id(MODAL_ID) {
        toggle_class(&modal, "hidden", true)?;
    }
    if let Some(content) = get_element_by_id(MODAL_CONTENT_ID) {
        set_inner_html(&content, "");
    }
    Ok(())
}

/// Abre el modal de `stall_id`; puesto desconocido o sin dataset = no-op
pub fn open_stall_modal(state: &AppState, stall_id: &str) -> Result<(), JsValue> {
    let Some(detail) = state.stall_detail(stall_id) else {
        log::info!("ℹ️ [MODAL] Puesto {} no disponible", stall_id);
        return Ok(());
    };
    let (Some(modal), Some(content)) =
        (get_element_by_id(MODAL_ID), get_element_by_id(MODAL_CONTENT_ID))
    else {
        return Ok(());
    };

    set_inner_html(&content, &stall_detail_html(&detail));
    append_child(&content, &render_like_actions(state, &detail)?)?;
    toggle_class(&modal, "hidden", false)?;
    Ok(())
}

fn render_like_actions(state: &AppState, detail: &StallDetail) -> Result<Element, JsValue> {
    let stall_id = detail.stall.id.clone();
    let button = {
        let state = state.clone();
        let stall_id = stall_id.clone();
        ElementBuilder::new("button")?
            .class(if detail.already_liked { "like disabled" } else { "like" })
            .attr("data-id", &stall_id)?
            .id(&like_button_id(&stall_id))?
            .text(StallViewModel::like_label(detail.already_liked))
            .on_click(move |_e| {
                state.like_stall(&stall_id);
            })?
            .build()
    };
    if detail.already_liked {
        button.set_attribute("disabled", "")?;
    }

    let counter = ElementBuilder::new("span")?
        .id(&like_counter_id(&stall_id))?
        .text(&detail.stall.likes.to_string())
        .build();

    ElementBuilder::new("div")?
        .class("actions")
        .child(button)?
        .child(counter)
        .map(ElementBuilder::build)
}

/// Refresca botón y contador una vez registrado el like
pub fn update_like_actions(state: &AppState, stall_id: &str) -> Result<(), JsValue> {
    let Some(detail) = state.stall_detail(stall_id) else {
        return Ok(());
    };
    if let Some(button) = get_element_by_id(&like_button_id(stall_id)) {
        if let Some(button) = button.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(detail.already_liked);
        }
        button.set_text_content(Some(StallViewModel::like_label(detail.already_liked)));
        toggle_class(&button, "disabled", detail.already_liked)?;
    }
    set_text_by_id(&like_counter_id(stall_id), &detail.stall.likes.to_string());
    Ok(())
}

fn like_button_id(stall_id: &str) -> String {
    format!("like-{}", stall_id)
}

fn like_counter_id(stall_id: &str) -> String {
    format!("likes-{}", stall_id)
}

pub fn stall_detail_html(detail: &StallDetail) -> String {
    let s = &detail.stall;
    let fractions = s
        .waste_fractions
        .iter()
        .map(|f| format!(r#"<span class="badge-chip">{}</span>"#, escape_html(f)))
        .collect::<Vec<_>>()
        .join(" ");
    let co2_line = format!(
        r#"{} kg <span class="small">(mål: {} kg) {}</span>"#,
        s.co2_per_meal_kg,
        detail.co2_goal,
        if detail.meets_co2_goal { "✅" } else { "⚠️" }
    );

    format!(
        r#"<h2>{name}</h2>
    <div class="info-grid">
      <div class="kv"><b>Madtype</b><div class="v">{food_type}</div></div>
      <div class="kv"><b>Energi</b><div class="v">{energy}</div></div>
      <div class="kv"><b>CO₂ pr. måltid</b><div class="v">{co2_line}</div></div>
      <div class="kv"><b>Madspild</b><div class="v">{waste}% • Donation: {donates}</div></div>
      <div class="kv">
        <b>Økologi</b>
        <div class="progress" title="{organic}%"><span style="width:{organic_width}%"></span></div>
        <div class="small">{organic}%</div>
      </div>
      <div class="kv">
        <b>Lokal andel</b>
        <div class="progress" title="{local}%"><span style="width:{local_width}%"></span></div>
        <div class="small">{local}%</div>
      </div>
    </div>

    <b>Affaldssortering</b>
    <div class="badges">{fractions}</div>

    <div class="flow">
      <div class="step">🍔 Mad</div><div class="sep">➜</div>
      <div class="step">🗑️ Affald</div><div class="sep">➜</div>
      <div class="step">🔄 Biogas/Genbrug</div><div class="sep">➜</div>
      <div class="step">🔋 Energi</div><div class="sep">➜</div>
      <div class="step">🎶 Festival</div>
    </div>"#,
        name = escape_html(&s.name),
        food_type = escape_html(&s.food_type),
        energy = escape_html(&s.energy),
        co2_line = co2_line,
        waste = s.food_waste_pct,
        donates = if s.donates_surplus { "Ja" } else { "Nej" },
        organic = s.organic_pct,
        organic_width = detail.organic_width,
        local = s.local_pct,
        local_width = detail.local_width,
        fractions = fractions,
    )
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// ============================================================================
// APP - Aplicación principal
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{
    append_child, apply_update, claim_global_listeners, get_element_by_id, map_click_callback,
    marker_click_callback, on_window_keydown, set_inner_html, update_role_controls,
};
use crate::services::fetch_dataset;
use crate::state::app_state::{AppState, IncrementalUpdate};
use crate::utils::leaflet_ffi::{on_map_click, on_marker_click};
use crate::viewmodels::MapViewModel;
use crate::views::{open_stall_modal, render_app};

pub struct App {
    state: AppState,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root =
            get_element_by_id("app").ok_or_else(|| JsValue::from_str("No #app element found"))?;
        let state = AppState::new();
        log::info!("🎭 [APP] Rol inicial: {}", state.role().as_str());

        // Batch: los cambios se aplican en el siguiente tick
        state.subscribe_to_changes(move |update| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, move || {
                crate::apply_app_update(update);
            })
            .forget();
        });

        Ok(Self { state, root })
    }

    /// Render inicial: layout, mapa, listeners globales y carga de data.json
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state)?;
        append_child(&self.root, &view)?;

        MapViewModel::initialize_map();

        if claim_global_listeners() {
            self.register_global_listeners()?;
        }

        update_role_controls(&self.state)?;
        self.update_incremental(IncrementalUpdate::HeatLayer)?;
        self.update_incremental(IncrementalUpdate::Dashboard)?;

        self.load_dataset();
        Ok(())
    }

    fn register_global_listeners(&self) -> Result<(), JsValue> {
        {
            let state = self.state.clone();
            on_window_keydown(move |e: web_sys::KeyboardEvent| {
                if e.key() == "Escape" && state.cancel_arming() {
                    log::info!("⎋ [APP] Marcado cancelado");
                }
            })?;
        }

        {
            let state = self.state.clone();
            let callback = map_click_callback(move |lat, lng| {
                if let Some(armed) = state.handle_map_click(lat, lng) {
                    state.schedule_undo_dismiss(armed.generation, CONFIG.undo_window_ms);
                }
            });
            on_map_click(&callback);
        }

        {
            let state = self.state.clone();
            let callback = marker_click_callback(move |stall_id: String| {
                if let Err(e) = open_stall_modal(&state, &stall_id) {
                    log::error!("❌ [MODAL] {:?}", e);
                }
            });
            on_marker_click(&callback);
        }

        Ok(())
    }

    /// El resto de la UI no espera a este fetch
    fn load_dataset(&self) {
        let state = self.state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_dataset(&CONFIG.data_url).await {
                Ok(dataset) => state.set_dataset(dataset),
                Err(e) => log::error!("❌ [DATA] Kunne ikke indlæse {}: {}", CONFIG.data_url, e),
            }
        });
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn update_incremental(&self, update: IncrementalUpdate) -> Result<(), JsValue> {
        apply_update(&self.state, update)
    }
}

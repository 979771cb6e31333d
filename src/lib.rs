// ============================================================================
// FESTIVAL MAP PWA - Cirkulær Madbod (RUST PURO + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM
// - ViewModels: cálculos puros (heatmap, dashboard, detalle de puesto)
// - Services: repositorios sobre localStorage, fetch de data.json, export
// - State: AppState con Rc<RefCell> + notificaciones incrementales
// - Models: estructuras serializables
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod viewmodels;
pub mod state;
pub mod dom;
pub mod views;
pub mod utils;
pub mod app;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::app_state::IncrementalUpdate;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() { log::Level::Info } else { log::Level::Warn };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("🚀 Cirkulær Madbod - Rust Puro");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });
    Ok(())
}

/// Aplica una actualización incremental sobre la app viva
pub fn apply_app_update(update: IncrementalUpdate) {
    APP.with(|app_cell| match app_cell.borrow().as_ref() {
        Some(app) => {
            if let Err(e) = app.update_incremental(update.clone()) {
                log::error!("❌ [UPDATE] Error en {:?}: {:?}", update, e);
            }
        }
        None => log::warn!("⚠️ [UPDATE] App no está inicializada"),
    });
}

/// Abre el modal de un puesto (llamable desde JavaScript)
#[wasm_bindgen(js_name = showStall)]
pub fn show_stall(stall_id: &str) {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            if let Err(e) = views::open_stall_modal(app.state(), stall_id) {
                log::error!("❌ [MODAL] {:?}", e);
            }
        }
    });
}

/// Like desde JavaScript; ignora likes repetidos
#[wasm_bindgen(js_name = likeStall)]
pub fn like_stall(stall_id: &str) {
    APP.with(|app_cell| {
        if let Some(app) = app_cell.borrow().as_ref() {
            app.state().like_stall(stall_id);
        }
    });
}

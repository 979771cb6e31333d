// ============================================================================
// LEAFLET FFI - Foreign Function Interface para static/leaflet_bridge.js
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initFestivalMap)]
    pub fn init_festival_map(container_id: &str, lat: f64, lng: f64, zoom: f64);

    #[wasm_bindgen(js_name = setStallMarkers)]
    pub fn set_stall_markers(stalls_json: &str);

    #[wasm_bindgen(js_name = configureHeatLayer)]
    pub fn configure_heat_layer(radius: u32, blur: u32, max_zoom: u32);

    #[wasm_bindgen(js_name = setHeatPoints)]
    pub fn set_heat_points(points_json: &str);

    #[wasm_bindgen(js_name = setHeatVisible)]
    pub fn set_heat_visible(visible: bool);

    #[wasm_bindgen(js_name = setArmingCursor)]
    pub fn set_arming_cursor(armed: bool);

    /// `callback(lat: number, lng: number)` en cada click sobre el mapa
    #[wasm_bindgen(js_name = onMapClick)]
    pub fn on_map_click(callback: &js_sys::Function);

    /// `callback(stallId: string)` al pulsar un marcador
    #[wasm_bindgen(js_name = onMarkerClick)]
    pub fn on_marker_click(callback: &js_sys::Function);
}

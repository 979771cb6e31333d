// ============================================================================
// MAP VIEWMODEL - Preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{HeatPoint, Stall};
use crate::utils::leaflet_ffi::*;

/// Marcador tal como lo consume el bridge JS
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapStall {
    pub id: String,
    pub name: String,
    pub coords: [f64; 2], // [lat, lng]
}

pub struct MapViewModel;

impl MapViewModel {
    pub fn initialize_map() {
        let map = &CONFIG.map_config;
        let heat = &CONFIG.heat_config;
        log::info!(
            "🗺️ [MAP] Inicializando mapa en ({}, {}) zoom {}",
            map.center_lat,
            map.center_lng,
            map.zoom
        );
        init_festival_map("map", map.center_lat, map.center_lng, map.zoom);
        configure_heat_layer(heat.radius, heat.blur, heat.max_zoom);
    }

    pub fn prepare_stalls_for_map(stalls: &[Stall]) -> Vec<MapStall> {
        stalls
            .iter()
            .map(|s| MapStall {
                id: s.id.clone(),
                name: s.name.clone(),
                coords: s.coords,
            })
            .collect()
    }

    pub fn update_stall_markers(stalls: &[Stall]) {
        let markers = Self::prepare_stalls_for_map(stalls);
        match serde_json::to_string(&markers) {
            Ok(json) => {
                set_stall_markers(&json);
                log::info!("📍 [MAP] {} marcadores enviados", markers.len());
            }
            Err(e) => log::error!("❌ [MAP] Error serializando marcadores: {}", e),
        }
    }

    pub fn update_heat_layer(points: &[HeatPoint], visible: bool) {
        match serde_json::to_string(points) {
            Ok(json) => set_heat_points(&json),
            Err(e) => log::error!("❌ [HEAT] Error serializando puntos: {}", e),
        }
        set_heat_visible(visible);
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub data_url: String,
    pub enable_logging: bool,
    pub undo_window_ms: u32,
    pub export_file_name: String,
    pub map_config: MapConfig,
    pub heat_config: HeatConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_url: "src/data.json".to_string(),
            enable_logging: true,
            undo_window_ms: 7000,
            export_file_name: "rapporter.json".to_string(),
            map_config: MapConfig::default(),
            heat_config: HeatConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: 55.6173,
            center_lng: 12.0784,
            zoom: 14.0,
        }
    }
}

/// Parámetros de la capa de calor (ventana temporal + opciones de leaflet.heat)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatConfig {
    pub window_hours: i64,
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        Self {
            window_hours: 24,
            radius: 25,
            blur: 15,
            max_zoom: 17,
        }
    }
}

impl HeatConfig {
    /// Ventana de reportes "recientes" en milisegundos
    pub fn window_ms(&self) -> i64 {
        self.window_hours * 60 * 60 * 1000
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            data_url: option_env!("DATA_URL")
                .map(str::to_string)
                .unwrap_or(defaults.data_url),
            enable_logging: parse_or(option_env!("ENABLE_LOGGING"), defaults.enable_logging),
            undo_window_ms: parse_or(option_env!("UNDO_WINDOW_MS"), defaults.undo_window_ms),
            export_file_name: option_env!("EXPORT_FILE_NAME")
                .map(str::to_string)
                .unwrap_or(defaults.export_file_name),
            map_config: MapConfig {
                center_lat: parse_or(option_env!("MAP_CENTER_LAT"), defaults.map_config.center_lat),
                center_lng: parse_or(option_env!("MAP_CENTER_LNG"), defaults.map_config.center_lng),
                zoom: parse_or(option_env!("MAP_ZOOM"), defaults.map_config.zoom),
            },
            heat_config: HeatConfig {
                window_hours: parse_or(
                    option_env!("HEAT_WINDOW_HOURS"),
                    defaults.heat_config.window_hours,
                ),
                radius: parse_or(option_env!("HEAT_RADIUS"), defaults.heat_config.radius),
                blur: parse_or(option_env!("HEAT_BLUR"), defaults.heat_config.blur),
                max_zoom: parse_or(option_env!("HEAT_MAX_ZOOM"), defaults.heat_config.max_zoom),
            },
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok()).unwrap_or(default)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

use serde::Serialize;

/// Totales del panel del organizador
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    /// Media de CO₂ por comida, ya formateada con 2 decimales
    pub avg_co2: String,
    pub avg_organic: i64,
    pub goal: f64,
    pub count: usize,
    pub under_goal: usize,
}

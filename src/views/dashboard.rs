// ============================================================================
// DASHBOARD VIEW - Estado del festival (solo organizador)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::DashboardTotals;
use crate::state::app_state::AppState;

pub const DASHBOARD_ID: &str = "dash";

pub fn render_dashboard(state: &AppState) -> Result<Element, JsValue> {
    let visible = state.role().visibility().dashboard;
    Ok(ElementBuilder::new("div")?
        .id(DASHBOARD_ID)?
        .class(if visible { "dash" } else { "dash hidden" })
        .html(&dashboard_html(state.dashboard_totals().as_ref(), state.report_count()))
        .build())
}

/// Contenido del panel; sin totales (dataset vacío o sin cargar) muestra "Ingen data"
pub fn dashboard_html(totals: Option<&DashboardTotals>, report_count: usize) -> String {
    let Some(t) = totals else {
        return format!(
            r#"<h4>Festival status</h4>
    <div class="row">
      <div class="pill">Ingen data</div>
      <div class="pill">Rapporter: <b>{}</b></div>
    </div>"#,
            report_count
        );
    };

    format!(
        r#"<h4>Festival status</h4>
    <div class="row">
      <div class="pill">Gns. CO₂/ret: <b>{avg_co2} kg</b> <span class="badge">mål {goal} kg</span></div>
      <div class="pill">Under CO₂-mål: <b>{under}/{count}</b></div>
      <div class="pill">Øko (gns.): <b>{organic}%</b></div>
      <div class="pill">Boder: <b>{count}</b></div>
      <div class="pill">Rapporter: <b>{reports}</b></div>
    </div>"#,
        avg_co2 = t.avg_co2,
        goal = t.goal,
        under = t.under_goal,
        count = t.count,
        organic = t.avg_organic,
        reports = report_count,
    )
}

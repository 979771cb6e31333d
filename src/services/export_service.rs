// ============================================================================
// EXPORT SERVICE - Descarga de reportes como JSON
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use crate::dom::create_element;
use crate::models::Report;

/// JSON con sangría, tal como se descarga
pub fn reports_to_json(reports: &[Report]) -> Result<String, String> {
    serde_json::to_string_pretty(reports).map_err(|e| format!("Error serializando reportes: {}", e))
}

/// Ofrece `data` como descarga `file_name` (Blob + object URL + <a download>)
pub fn download_json(file_name: &str, data: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(data));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)?;
    log::info!("📤 [EXPORT] {} generado ({} bytes)", file_name, data.len());
    Ok(())
}

pub fn export_reports(file_name: &str, reports: &[Report]) -> Result<(), JsValue> {
    let json = reports_to_json(reports).map_err(|e| JsValue::from_str(&e))?;
    download_json(file_name, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportKind;
    use crate::services::ReportRepository;
    use crate::utils::storage::MemoryStorage;
    use std::rc::Rc;

    #[test]
    fn test_export_round_trips() {
        let repo = ReportRepository::new(Rc::new(MemoryStorage::new()));
        let first = repo.add_at(55.61841, 12.07962, ReportKind::Trash, 1_720_000_000_000);
        let second = repo.add_at(55.6179, 12.0745, ReportKind::Trash, 1_720_000_060_000);

        let stored = repo.load_all();
        let json = reports_to_json(&stored).unwrap();
        assert!(json.contains('\n'), "debe ir con sangría");

        let parsed: Vec<Report> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stored);
        let ids: Vec<&str> = parsed.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    }

    #[test]
    fn test_export_of_nothing_is_empty_array() {
        assert_eq!(reports_to_json(&[]).unwrap(), "[]");
    }
}

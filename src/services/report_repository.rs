// ============================================================================
// REPORT REPOSITORY - Reportes de basura locales (localStorage)
// ============================================================================

use chrono::Utc;
use uuid::Uuid;

use crate::models::{Report, ReportKind};
use crate::utils::storage::{load_json_or_default, save_json, SharedStore, LS_REPORTS};

/// Repositorio de reportes: la lista completa se reescribe en cada cambio.
/// Sobre un `CachedStore` un fallo al persistir solo se registra; la sesión sigue
/// con la copia en memoria.
#[derive(Clone)]
pub struct ReportRepository {
    store: SharedStore,
}

impl ReportRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn load_all(&self) -> Vec<Report> {
        load_json_or_default(self.store.as_ref(), LS_REPORTS)
    }

    pub fn count(&self) -> usize {
        self.load_all().len()
    }

    /// Crea un reporte con la hora actual y devuelve su id
    pub fn add(&self, lat: f64, lng: f64, kind: ReportKind) -> String {
        self.add_at(lat, lng, kind, Utc::now().timestamp_millis())
    }

    pub fn add_at(&self, lat: f64, lng: f64, kind: ReportKind, now_ms: i64) -> String {
        let id = generate_report_id(now_ms);
        let mut reports = self.load_all();
        reports.push(Report {
            id: id.clone(),
            lat,
            lng,
            kind,
            t: now_ms,
        });
        self.persist(&reports);
        log::info!("📍 [REPORTS] Reporte {} guardado ({} en total)", id, reports.len());
        id
    }

    /// Devuelve true si existía un reporte con ese id
    pub fn remove_by_id(&self, id: &str) -> bool {
        let mut reports = self.load_all();
        let before = reports.len();
        reports.retain(|r| r.id != id);
        if reports.len() == before {
            return false;
        }
        self.persist(&reports);
        log::info!("↩️ [REPORTS] Reporte {} eliminado", id);
        true
    }

    fn persist(&self, reports: &[Report]) {
        if let Err(e) = save_json(self.store.as_ref(), LS_REPORTS, reports) {
            log::error!("❌ [REPORTS] {} (se mantiene en memoria)", e);
        }
    }
}

/// `<epoch-ms>-<5 caracteres aleatorios>`
fn generate_report_id(now_ms: i64) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", now_ms, &suffix[..5])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::{CachedStore, FailingStore, KeyValueStore, MemoryStorage};
    use std::rc::Rc;

    fn repo() -> ReportRepository {
        ReportRepository::new(Rc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_add_and_remove_keep_count_in_sync() {
        let repo = repo();
        let a = repo.add_at(55.61, 12.07, ReportKind::Trash, 1_000);
        let b = repo.add_at(55.62, 12.08, ReportKind::Trash, 2_000);
        let _c = repo.add_at(55.63, 12.09, ReportKind::Trash, 3_000);
        assert_eq!(repo.count(), 3);

        assert!(repo.remove_by_id(&a));
        assert!(!repo.remove_by_id(&a));
        assert!(!repo.remove_by_id("does-not-exist"));
        assert_eq!(repo.count(), 2);

        assert!(repo.remove_by_id(&b));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_ids_are_time_prefixed_and_unique() {
        let repo = repo();
        let a = repo.add_at(1.0, 1.0, ReportKind::Trash, 1_700_000_000_000);
        let b = repo.add_at(1.0, 1.0, ReportKind::Trash, 1_700_000_000_000);
        assert!(a.starts_with("1700000000000-"));
        assert_eq!(a.len(), "1700000000000-".len() + 5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_reports_are_persisted_in_order() {
        let store = Rc::new(MemoryStorage::new());
        let repo = ReportRepository::new(store.clone());
        let first = repo.add_at(1.0, 2.0, ReportKind::Trash, 10);
        let second = repo.add_at(3.0, 4.0, ReportKind::Trash, 20);

        // Otra instancia sobre el mismo storage ve lo mismo
        let reopened = ReportRepository::new(store);
        let ids: Vec<String> = reopened.load_all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_corrupt_storage_reads_as_empty() {
        let store = Rc::new(MemoryStorage::new());
        store.set(LS_REPORTS, "[{\"id\":").unwrap();
        let repo = ReportRepository::new(store);
        assert!(repo.load_all().is_empty());
        assert_eq!(repo.count(), 0);

        // Y el siguiente add sobreescribe el blob roto
        repo.add_at(1.0, 1.0, ReportKind::Trash, 1);
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_rejected_write_keeps_report_in_session() {
        let repo = ReportRepository::new(Rc::new(CachedStore::new(Rc::new(FailingStore))));
        let id = repo.add_at(55.6, 12.0, ReportKind::Trash, 1_000);
        assert_eq!(repo.count(), 1);

        assert!(repo.remove_by_id(&id));
        assert_eq!(repo.count(), 0);
    }
}

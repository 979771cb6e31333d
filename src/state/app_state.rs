// ============================================================================
// APP STATE - Estado de la aplicación + acciones del usuario
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;

use crate::config::CONFIG;
use crate::models::{DashboardTotals, Dataset, HeatPoint, ReportKind, Role};
use crate::services::{LikeRepository, ReportRepository, RoleStore};
use crate::state::UndoWindow;
use crate::utils::storage::{open_default_store, CachedStore, SharedStore};
use crate::viewmodels::{DashboardViewModel, HeatViewModel, StallDetail, StallViewModel};

/// Parte de la UI que debe refrescarse tras un cambio de estado
#[derive(Clone, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Marcadores de puestos (tras cargar data.json)
    StallMarkers,
    /// Puntos y visibilidad de la capa de calor
    HeatLayer,
    /// Panel del organizador
    Dashboard,
    /// Botones/paneles visibles según el rol
    RoleControls,
    /// Cursor en cruz mientras se espera el click del reporte
    ArmingCursor,
    /// Botón "Fortryd markering"
    UndoButton,
    /// Botón y contador de likes de un puesto abierto en el modal
    StallLikes(String),
}

/// Reporte recién creado desde el mapa
#[derive(Clone, Debug, PartialEq)]
pub struct ArmedReport {
    pub id: String,
    pub generation: u64,
}

type Subscriber = Rc<dyn Fn(IncrementalUpdate)>;

/// Estado global de la aplicación (lo posee `App`, se pasa a las vistas)
#[derive(Clone)]
pub struct AppState {
    pub reports: ReportRepository,
    pub likes: LikeRepository,
    pub roles: RoleStore,

    // Datos estáticos; None hasta que termina el fetch
    pub dataset: Rc<RefCell<Option<Dataset>>>,

    // UI State
    pub heat_on: Rc<RefCell<bool>>,
    pub arming_report: Rc<RefCell<bool>>,
    pub undo: Rc<RefCell<UndoWindow>>,
    pub undo_timer: Rc<RefCell<Option<Timeout>>>,

    pub change_subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(open_default_store())
    }

    /// `store` queda detrás de un `CachedStore`: si el navegador rechaza una
    /// escritura la sesión sigue con la copia en memoria
    pub fn with_store(store: SharedStore) -> Self {
        let store: SharedStore = Rc::new(CachedStore::new(store));
        Self {
            reports: ReportRepository::new(store.clone()),
            likes: LikeRepository::new(store.clone()),
            roles: RoleStore::new(store),
            dataset: Rc::new(RefCell::new(None)),
            heat_on: Rc::new(RefCell::new(false)),
            arming_report: Rc::new(RefCell::new(false)),
            undo: Rc::new(RefCell::new(UndoWindow::new())),
            undo_timer: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(IncrementalUpdate) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    pub fn notify(&self, update: IncrementalUpdate) {
        // Copia para que un subscriber pueda suscribir/notificar sin doble borrow
        let subscribers: Vec<Subscriber> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback(update.clone());
        }
    }

    fn notify_all(&self, updates: &[IncrementalUpdate]) {
        for update in updates {
            self.notify(update.clone());
        }
    }

    // ------------------------------------------------------------------
    // Dataset
    // ------------------------------------------------------------------

    pub fn set_dataset(&self, dataset: Dataset) {
        *self.dataset.borrow_mut() = Some(dataset);
        self.notify_all(&[IncrementalUpdate::StallMarkers, IncrementalUpdate::Dashboard]);
    }

    pub fn stall_detail(&self, stall_id: &str) -> Option<StallDetail> {
        let dataset = self.dataset.borrow();
        let dataset = dataset.as_ref()?;
        let stall = dataset.stall(stall_id)?;
        let already_liked = self.has_liked(stall_id);
        Some(StallViewModel::detail(stall, dataset.co2_goal(), already_liked))
    }

    // ------------------------------------------------------------------
    // Rol
    // ------------------------------------------------------------------

    pub fn role(&self) -> Role {
        self.roles.get_role()
    }

    /// Persiste el rol y apaga lo que el nuevo rol no puede usar
    pub fn set_role(&self, role: Role) {
        if let Err(e) = self.roles.set_role(role) {
            log::error!("❌ [ROLE] {}", e);
        }

        let visibility = role.visibility();
        if !visibility.heat_toggle {
            *self.heat_on.borrow_mut() = false;
        }
        if !visibility.report_button {
            *self.arming_report.borrow_mut() = false;
        }

        self.notify_all(&[
            IncrementalUpdate::RoleControls,
            IncrementalUpdate::ArmingCursor,
            IncrementalUpdate::HeatLayer,
            IncrementalUpdate::Dashboard,
        ]);
    }

    // ------------------------------------------------------------------
    // Heatmap
    // ------------------------------------------------------------------

    pub fn is_heat_on(&self) -> bool {
        *self.heat_on.borrow()
    }

    /// Devuelve el nuevo estado; el rol organizador no tiene heatmap
    pub fn toggle_heat(&self) -> bool {
        if !self.role().visibility().heat_toggle {
            return false;
        }
        let now_on = {
            let mut heat_on = self.heat_on.borrow_mut();
            *heat_on = !*heat_on;
            *heat_on
        };
        self.notify(IncrementalUpdate::HeatLayer);
        now_on
    }

    pub fn heat_points(&self) -> Vec<HeatPoint> {
        self.heat_points_at(Utc::now().timestamp_millis())
    }

    pub fn heat_points_at(&self, now_ms: i64) -> Vec<HeatPoint> {
        let window_ms = CONFIG.heat_config.window_ms();
        HeatViewModel::compute_heat_points(&self.reports.load_all(), now_ms, window_ms)
    }

    // ------------------------------------------------------------------
    // Reportes
    // ------------------------------------------------------------------

    pub fn is_arming(&self) -> bool {
        *self.arming_report.borrow()
    }

    /// El próximo click en el mapa crea un reporte
    pub fn arm_report(&self) -> bool {
        if !self.role().visibility().report_button {
            return false;
        }
        *self.arming_report.borrow_mut() = true;
        self.notify(IncrementalUpdate::ArmingCursor);
        true
    }

    /// Escape
    pub fn cancel_arming(&self) -> bool {
        if !self.is_arming() {
            return false;
        }
        *self.arming_report.borrow_mut() = false;
        self.notify(IncrementalUpdate::ArmingCursor);
        true
    }

    /// Click en el mapa: solo crea reporte si estaba armado
    pub fn handle_map_click(&self, lat: f64, lng: f64) -> Option<ArmedReport> {
        if !self.is_arming() {
            return None;
        }
        *self.arming_report.borrow_mut() = false;
        self.notify(IncrementalUpdate::ArmingCursor);

        let id = self.reports.add(lat, lng, ReportKind::Trash);
        let generation = self.undo.borrow_mut().arm(id.clone());

        self.notify_all(&[
            IncrementalUpdate::HeatLayer,
            IncrementalUpdate::Dashboard,
            IncrementalUpdate::UndoButton,
        ]);
        Some(ArmedReport { id, generation })
    }

    pub fn armed_report_id(&self) -> Option<String> {
        self.undo.borrow().armed().map(str::to_string)
    }

    /// Programa el cierre de la ventana de deshacer, cancelando el timer anterior
    pub fn schedule_undo_dismiss(&self, generation: u64, delay_ms: u32) {
        self.cancel_undo_timer();
        let state = self.clone();
        let timeout = Timeout::new(delay_ms, move || {
            state.expire_undo(generation);
        });
        *self.undo_timer.borrow_mut() = Some(timeout);
    }

    fn cancel_undo_timer(&self) {
        if let Some(pending) = self.undo_timer.borrow_mut().take() {
            pending.cancel();
        }
    }

    pub fn expire_undo(&self, generation: u64) -> bool {
        let expired = self.undo.borrow_mut().expire(generation);
        if expired {
            self.notify(IncrementalUpdate::UndoButton);
        }
        expired
    }

    /// Botón deshacer: borra el último reporte armado
    pub fn undo_last_report(&self) -> bool {
        let armed = self.undo.borrow_mut().take();
        self.cancel_undo_timer();

        let removed = armed.is_some_and(|id| self.reports.remove_by_id(&id));

        self.notify_all(&[
            IncrementalUpdate::UndoButton,
            IncrementalUpdate::HeatLayer,
            IncrementalUpdate::Dashboard,
        ]);
        removed
    }

    pub fn report_count(&self) -> usize {
        self.reports.count()
    }

    // ------------------------------------------------------------------
    // Likes
    // ------------------------------------------------------------------

    pub fn has_liked(&self, stall_id: &str) -> bool {
        self.likes.has_liked(&self.likes.device_id(), stall_id)
    }

    /// Nuevo contador si el like se registró; None para like repetido,
    /// puesto desconocido o dataset sin cargar
    pub fn like_stall(&self, stall_id: &str) -> Option<u32> {
        let device_id = self.likes.device_id();
        let likes = {
            let mut dataset = self.dataset.borrow_mut();
            let stall = dataset.as_mut()?.stall_mut(stall_id)?;
            if !self.likes.like(&device_id, stall) {
                return None;
            }
            stall.likes
        };
        self.notify(IncrementalUpdate::StallLikes(stall_id.to_string()));
        Some(likes)
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    pub fn dashboard_totals(&self) -> Option<DashboardTotals> {
        let dataset = self.dataset.borrow();
        let dataset = dataset.as_ref()?;
        DashboardViewModel::compute_totals(&dataset.stalls, dataset.co2_goal())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

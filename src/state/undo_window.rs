// ============================================================================
// UNDO WINDOW - "Fortryd markering" para el último reporte
// ============================================================================

/// Último reporte que aún se puede deshacer. Cada `arm` abre una generación nueva
/// para que un timer viejo no cierre la ventana de un reporte más reciente.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UndoWindow {
    armed: Option<String>,
    generation: u64,
}

impl UndoWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reemplaza cualquier reporte armado antes
    pub fn arm(&mut self, report_id: String) -> u64 {
        self.generation += 1;
        self.armed = Some(report_id);
        self.generation
    }

    pub fn armed(&self) -> Option<&str> {
        self.armed.as_deref()
    }

    pub fn take(&mut self) -> Option<String> {
        self.armed.take()
    }

    /// Cierra la ventana solo si `generation` sigue siendo la vigente
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.armed.is_none() {
            return false;
        }
        self.armed = None;
        true
    }
}

// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod undo_window;
pub mod app_state;

pub use undo_window::*;
pub use app_state::*;

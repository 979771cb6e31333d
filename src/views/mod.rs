pub mod app;
pub mod controls;
pub mod dashboard;
pub mod stall_modal;

pub use app::render_app;
pub use controls::{
    heat_button_label, render_map_controls, render_role_selector, render_undo_button,
};
pub use dashboard::{dashboard_html, render_dashboard};
pub use stall_modal::{close_modal, open_stall_modal, render_modal_shell, update_like_actions};

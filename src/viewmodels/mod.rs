pub mod heat_viewmodel;
pub mod dashboard_viewmodel;
pub mod stall_viewmodel;
pub mod map_viewmodel;

pub use heat_viewmodel::{HeatViewModel, FALLBACK_HEAT_POINTS};
pub use dashboard_viewmodel::DashboardViewModel;
pub use stall_viewmodel::{StallDetail, StallViewModel};
pub use map_viewmodel::{MapStall, MapViewModel};

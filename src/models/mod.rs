pub mod report;
pub mod stall;
pub mod role;
pub mod heat;
pub mod dashboard;

pub use report::{Report, ReportKind};
pub use stall::{Dataset, DatasetMeta, Stall};
pub use role::{Role, RoleVisibility};
pub use heat::HeatPoint;
pub use dashboard::DashboardTotals;

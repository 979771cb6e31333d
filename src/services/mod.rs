pub mod report_repository;
pub mod like_repository;
pub mod role_store;
pub mod dataset_service;
pub mod export_service;

pub use report_repository::ReportRepository;
pub use like_repository::{LikeMap, LikeRepository};
pub use role_store::RoleStore;
pub use dataset_service::{fetch_dataset, parse_dataset, DatasetError};
pub use export_service::{export_reports, reports_to_json};

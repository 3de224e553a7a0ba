pub mod entity;
pub mod repository;

pub use entity::{MaintenanceId, MaintenanceRecord, MaintenanceStatus, NewMaintenanceRecord};
pub use repository::MaintenanceRepository;

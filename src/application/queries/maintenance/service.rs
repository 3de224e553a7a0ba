use std::sync::Arc;

use crate::domain::maintenance::MaintenanceRepository;

pub struct MaintenanceQueryService {
    pub(super) maintenance_repo: Arc<dyn MaintenanceRepository>,
}

impl MaintenanceQueryService {
    pub fn new(maintenance_repo: Arc<dyn MaintenanceRepository>) -> Self {
        Self { maintenance_repo }
    }
}

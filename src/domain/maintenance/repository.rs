use crate::domain::asset::AssetId;
use crate::domain::errors::DomainResult;
use crate::domain::maintenance::entity::{MaintenanceId, MaintenanceRecord, NewMaintenanceRecord};
use async_trait::async_trait;

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn insert(&self, record: NewMaintenanceRecord) -> DomainResult<MaintenanceRecord>;

    async fn find_by_id(&self, id: MaintenanceId) -> DomainResult<Option<MaintenanceRecord>>;

    async fn update(&self, record: &MaintenanceRecord) -> DomainResult<()>;

    async fn list(&self) -> DomainResult<Vec<MaintenanceRecord>>;

    async fn list_for_asset(&self, asset_id: AssetId) -> DomainResult<Vec<MaintenanceRecord>>;

    async fn list_open(&self) -> DomainResult<Vec<MaintenanceRecord>>;
}

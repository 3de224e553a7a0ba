use super::MaintenanceQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, MaintenanceDto},
        error::ApplicationResult,
    },
    domain::asset::AssetId,
};

pub struct AssetMaintenanceQuery {
    pub asset_id: i64,
}

impl MaintenanceQueryService {
    pub async fn list_records(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<MaintenanceDto>> {
        ensure_capability(actor, "maintenance", "read")?;

        let records = self.maintenance_repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn records_for_asset(
        &self,
        actor: &AuthenticatedUser,
        query: AssetMaintenanceQuery,
    ) -> ApplicationResult<Vec<MaintenanceDto>> {
        ensure_capability(actor, "maintenance", "read")?;

        let asset_id = AssetId::new(query.asset_id)?;
        let records = self.maintenance_repo.list_for_asset(asset_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

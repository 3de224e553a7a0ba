// src/application/commands/maintenance/close.rs
use super::MaintenanceCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, MaintenanceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::maintenance::MaintenanceId,
};

pub struct CloseMaintenanceCommand {
    pub id: i64,
}

impl MaintenanceCommandService {
    /// Closes the record and resets the owning asset to `Available`, even
    /// when other maintenance records for that asset remain open.
    pub async fn close(
        &self,
        actor: &AuthenticatedUser,
        command: CloseMaintenanceCommand,
    ) -> ApplicationResult<MaintenanceDto> {
        ensure_capability(actor, "maintenance", "manage")?;

        let id = MaintenanceId::new(command.id)?;
        let mut record = self
            .maintenance_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("maintenance record not found"))?;

        let _guard = self.locks.acquire(record.asset_id).await;

        record.close();
        self.maintenance_repo.update(&record).await?;

        // The asset may have been hard-deleted since the record was opened;
        // the close still succeeds and the audit row keeps the stored id.
        let description = match self.asset_repo.find_by_id(record.asset_id).await? {
            Some(mut asset) => {
                asset.end_maintenance();
                self.asset_repo
                    .update_assignment(asset.id, asset.status, asset.assigned_to)
                    .await?;
                format!("Asset {} maintenance closed", asset.tag)
            }
            None => format!(
                "Maintenance closed for missing asset {}",
                i64::from(record.asset_id)
            ),
        };

        self.record_audit(
            actor,
            "MAINTENANCE_CLOSE",
            record.asset_id.into(),
            description,
        )
        .await?;

        Ok(record.into())
    }
}

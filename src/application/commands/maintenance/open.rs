// src/application/commands/maintenance/open.rs
use super::MaintenanceCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, MaintenanceDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        asset::AssetId,
        maintenance::{MaintenanceStatus, NewMaintenanceRecord},
    },
};
use chrono::{DateTime, Utc};

pub struct OpenMaintenanceCommand {
    pub asset_id: i64,
    pub issue_description: String,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub maintenance_date: Option<DateTime<Utc>>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
}

impl MaintenanceCommandService {
    /// Logs a service episode and moves the asset to `Under Maintenance`.
    /// Nothing prevents a second open record for the same asset.
    pub async fn open(
        &self,
        actor: &AuthenticatedUser,
        command: OpenMaintenanceCommand,
    ) -> ApplicationResult<MaintenanceDto> {
        ensure_capability(actor, "maintenance", "manage")?;

        if command.issue_description.trim().is_empty() {
            return Err(ApplicationError::validation(
                "issue description cannot be empty",
            ));
        }

        let asset_id = AssetId::new(command.asset_id)?;
        let _guard = self.locks.acquire(asset_id).await;

        let mut asset = self
            .asset_repo
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("asset not found"))?;

        let record = self
            .maintenance_repo
            .insert(NewMaintenanceRecord {
                asset_id,
                maintenance_date: command.maintenance_date.unwrap_or_else(|| self.clock.now()),
                issue_description: command.issue_description,
                vendor: command.vendor,
                cost: command.cost,
                next_maintenance_date: command.next_maintenance_date,
                status: MaintenanceStatus::Open,
            })
            .await?;

        asset.begin_maintenance();
        self.asset_repo
            .update_assignment(asset.id, asset.status, asset.assigned_to)
            .await?;

        self.record_audit(
            actor,
            "MAINTENANCE_START",
            asset.id.into(),
            format!("Asset {} sent for maintenance", asset.tag),
        )
        .await?;

        Ok(record.into())
    }
}

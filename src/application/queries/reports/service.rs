// src/application/queries/reports/service.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AssetDto, AuthenticatedUser, InventoryReportDto, MaintenanceDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::{asset::AssetRepository, maintenance::MaintenanceRepository},
};
use chrono::Duration;

const WARRANTY_WINDOW_DAYS: i64 = 30;

pub struct ReportQueryService {
    asset_repo: Arc<dyn AssetRepository>,
    maintenance_repo: Arc<dyn MaintenanceRepository>,
    clock: Arc<dyn Clock>,
}

impl ReportQueryService {
    pub fn new(
        asset_repo: Arc<dyn AssetRepository>,
        maintenance_repo: Arc<dyn MaintenanceRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            asset_repo,
            maintenance_repo,
            clock,
        }
    }

    /// Asset counts grouped by status, type and department.
    pub async fn inventory(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<InventoryReportDto> {
        ensure_capability(actor, "reports", "read")?;

        let status_stats = self.asset_repo.count_by_status().await?;
        let type_stats = self.asset_repo.count_by_type().await?;
        let department_stats = self.asset_repo.count_by_department().await?;

        Ok(InventoryReportDto {
            status_stats: status_stats.into_iter().map(Into::into).collect(),
            type_stats: type_stats.into_iter().map(Into::into).collect(),
            department_stats: department_stats.into_iter().map(Into::into).collect(),
        })
    }

    /// Assets whose warranty runs out within the next 30 days.
    pub async fn warranty_expiry(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<AssetDto>> {
        ensure_capability(actor, "reports", "read")?;

        let now = self.clock.now();
        let horizon = now + Duration::days(WARRANTY_WINDOW_DAYS);
        let assets = self
            .asset_repo
            .warranty_expiring_between(now, horizon)
            .await?;
        Ok(assets.into_iter().map(Into::into).collect())
    }

    /// Every maintenance record still open.
    pub async fn open_maintenance(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<MaintenanceDto>> {
        ensure_capability(actor, "reports", "read")?;

        let records = self.maintenance_repo.list_open().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

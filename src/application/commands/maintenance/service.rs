// src/application/commands/maintenance/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser, error::ApplicationResult, ports::time::Clock,
        services::asset_locks::AssetLocks,
    },
    domain::{
        asset::AssetRepository,
        audit::{AuditLog, AuditLogRepository},
        maintenance::MaintenanceRepository,
    },
};

pub struct MaintenanceCommandService {
    pub(super) maintenance_repo: Arc<dyn MaintenanceRepository>,
    pub(super) asset_repo: Arc<dyn AssetRepository>,
    pub(super) audit_repo: Arc<dyn AuditLogRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) locks: Arc<AssetLocks>,
}

impl MaintenanceCommandService {
    pub fn new(
        maintenance_repo: Arc<dyn MaintenanceRepository>,
        asset_repo: Arc<dyn AssetRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        clock: Arc<dyn Clock>,
        locks: Arc<AssetLocks>,
    ) -> Self {
        Self {
            maintenance_repo,
            asset_repo,
            audit_repo,
            clock,
            locks,
        }
    }

    pub(super) async fn record_audit(
        &self,
        actor: &AuthenticatedUser,
        action: &str,
        asset_id: i64,
        description: String,
    ) -> ApplicationResult<()> {
        self.audit_repo
            .insert(AuditLog {
                id: None,
                action: action.into(),
                performed_by: actor.id,
                entity_type: "Asset".into(),
                entity_id: Some(asset_id),
                description,
                timestamp: self.clock.now(),
            })
            .await?;
        Ok(())
    }
}

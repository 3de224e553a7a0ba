// src/application/commands/allocations/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser, error::ApplicationResult, ports::time::Clock,
        services::asset_locks::AssetLocks,
    },
    domain::{
        allocation::AllocationRepository,
        asset::{Asset, AssetRepository},
        audit::{AuditLog, AuditLogRepository},
    },
};

/// Orchestrates the assign/transfer/return lifecycle. Each operation runs
/// under the asset's lock and reports to the audit sink after its writes
/// have been committed.
pub struct AllocationCommandService {
    pub(super) asset_repo: Arc<dyn AssetRepository>,
    pub(super) allocation_repo: Arc<dyn AllocationRepository>,
    pub(super) audit_repo: Arc<dyn AuditLogRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) locks: Arc<AssetLocks>,
}

impl AllocationCommandService {
    pub fn new(
        asset_repo: Arc<dyn AssetRepository>,
        allocation_repo: Arc<dyn AllocationRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        clock: Arc<dyn Clock>,
        locks: Arc<AssetLocks>,
    ) -> Self {
        Self {
            asset_repo,
            allocation_repo,
            audit_repo,
            clock,
            locks,
        }
    }

    pub(super) async fn record_audit(
        &self,
        actor: &AuthenticatedUser,
        action: &str,
        asset: &Asset,
        description: String,
    ) -> ApplicationResult<()> {
        self.audit_repo
            .insert(AuditLog {
                id: None,
                action: action.into(),
                performed_by: actor.id,
                entity_type: "Asset".into(),
                entity_id: Some(asset.id.into()),
                description,
                timestamp: self.clock.now(),
            })
            .await?;
        Ok(())
    }
}

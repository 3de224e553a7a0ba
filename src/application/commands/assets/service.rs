// src/application/commands/assets/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult, ports::time::Clock},
    domain::{
        asset::{Asset, AssetRepository},
        audit::{AuditLog, AuditLogRepository},
    },
};

pub struct AssetCommandService {
    pub(super) asset_repo: Arc<dyn AssetRepository>,
    pub(super) audit_repo: Arc<dyn AuditLogRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl AssetCommandService {
    pub fn new(
        asset_repo: Arc<dyn AssetRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            asset_repo,
            audit_repo,
            clock,
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

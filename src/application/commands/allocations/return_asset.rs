// src/application/commands/allocations/return_asset.rs
use super::AllocationCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AllocationDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{allocation::AllocationStatus, asset::AssetId},
};
use chrono::{DateTime, Utc};

pub struct ReturnAssetCommand {
    pub asset_id: i64,
    pub return_date: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

impl AllocationCommandService {
    /// Takes an asset back into the pool. When no active allocation exists
    /// this is a no-op on the history, but the asset is still reset to
    /// `Available` with its holder cleared. Returns the closed allocation,
    /// or `None` when nothing was open.
    pub async fn return_asset(
        &self,
        actor: &AuthenticatedUser,
        command: ReturnAssetCommand,
    ) -> ApplicationResult<Option<AllocationDto>> {
        ensure_capability(actor, "allocations", "manage")?;

        let asset_id = AssetId::new(command.asset_id)?;
        let _guard = self.locks.acquire(asset_id).await;

        let mut asset = self
            .asset_repo
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("asset not found"))?;

        let return_date = command.return_date.unwrap_or_else(|| self.clock.now());

        let closed = match self.allocation_repo.find_active_for_asset(asset_id).await? {
            Some(mut active) => {
                active.close(AllocationStatus::Returned, return_date);
                if let Some(remark) = command.remarks.as_deref() {
                    active.append_return_remark(remark);
                }
                self.allocation_repo.update(&active).await?;
                Some(active)
            }
            None => None,
        };

        asset.release();
        self.asset_repo
            .update_assignment(asset.id, asset.status, asset.assigned_to)
            .await?;

        self.record_audit(
            actor,
            "RETURN",
            &asset,
            format!("Returned asset {}", asset.tag),
        )
        .await?;

        Ok(closed.map(Into::into))
    }
}

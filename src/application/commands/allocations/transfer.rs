// src/application/commands/allocations/transfer.rs
use super::AllocationCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AllocationDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        allocation::{AllocationStatus, NewAllocation},
        asset::AssetId,
        user::UserId,
    },
};
use chrono::{DateTime, Utc};

pub struct TransferAssetCommand {
    pub asset_id: i64,
    /// Accepted but never verified against the current holder.
    pub from_user: i64,
    pub to_user: i64,
    pub remarks: Option<String>,
    pub transfer_date: Option<DateTime<Utc>>,
}

impl AllocationCommandService {
    /// Moves custody to `to_user`: closes the active allocation as
    /// `transferred` when one exists, opens a fresh one, and re-points the
    /// asset's holder. Proceeds even with no active allocation, and leaves
    /// the asset status untouched.
    pub async fn transfer(
        &self,
        actor: &AuthenticatedUser,
        command: TransferAssetCommand,
    ) -> ApplicationResult<AllocationDto> {
        ensure_capability(actor, "allocations", "manage")?;

        let asset_id = AssetId::new(command.asset_id)?;
        let to_user = UserId::new(command.to_user)?;
        let _guard = self.locks.acquire(asset_id).await;

        let mut asset = self
            .asset_repo
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("asset not found"))?;

        let transfer_date = command.transfer_date.unwrap_or_else(|| self.clock.now());

        if let Some(mut active) = self.allocation_repo.find_active_for_asset(asset_id).await? {
            active.close(AllocationStatus::Transferred, transfer_date);
            self.allocation_repo.update(&active).await?;
        }

        let remarks = format!(
            "Transferred from previous user. {}",
            command.remarks.as_deref().unwrap_or_default()
        );
        let allocation = self
            .allocation_repo
            .insert(NewAllocation {
                asset_id,
                assigned_to: to_user,
                assigned_by: actor.id,
                assigned_date: transfer_date,
                status: AllocationStatus::Assigned,
                remarks: Some(remarks),
            })
            .await?;

        asset.transfer_to(to_user);
        self.asset_repo
            .update_assignment(asset.id, asset.status, asset.assigned_to)
            .await?;

        self.record_audit(
            actor,
            "TRANSFER",
            &asset,
            format!("Transferred asset {} to user {}", asset.tag, command.to_user),
        )
        .await?;

        Ok(allocation.into())
    }
}

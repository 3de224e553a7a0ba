// src/application/commands/allocations/assign.rs
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

pub struct AssignAssetCommand {
    pub asset_id: i64,
    pub assigned_to: i64,
    pub remarks: Option<String>,
    pub assigned_date: Option<DateTime<Utc>>,
}

impl AllocationCommandService {
    /// Hands an `Available` asset to a user: opens an allocation, mirrors the
    /// assignment onto the asset, and writes an ASSIGN audit record.
    pub async fn assign(
        &self,
        actor: &AuthenticatedUser,
        command: AssignAssetCommand,
    ) -> ApplicationResult<AllocationDto> {
        ensure_capability(actor, "allocations", "manage")?;

        let asset_id = AssetId::new(command.asset_id)?;
        let assigned_to = UserId::new(command.assigned_to)?;
        let _guard = self.locks.acquire(asset_id).await;

        let mut asset = self
            .asset_repo
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("asset not found"))?;
        asset.assign_to(assigned_to)?;

        let assigned_date = command.assigned_date.unwrap_or_else(|| self.clock.now());
        let allocation = self
            .allocation_repo
            .insert(NewAllocation {
                asset_id,
                assigned_to,
                assigned_by: actor.id,
                assigned_date,
                status: AllocationStatus::Assigned,
                remarks: command.remarks,
            })
            .await?;

        self.asset_repo
            .update_assignment(asset.id, asset.status, asset.assigned_to)
            .await?;

        self.record_audit(
            actor,
            "ASSIGN",
            &asset,
            format!(
                "Assigned asset {} to user {}",
                asset.tag, command.assigned_to
            ),
        )
        .await?;

        Ok(allocation.into())
    }
}

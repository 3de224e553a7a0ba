use crate::domain::allocation::entity::{
    Allocation, AssetHistoryEntry, NewAllocation, UserHistoryEntry,
};
use crate::domain::asset::AssetId;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait AllocationRepository: Send + Sync {
    async fn insert(&self, new_allocation: NewAllocation) -> DomainResult<Allocation>;

    /// The allocation currently in force for the asset, if any. At most one
    /// row per asset should be in `assigned` state.
    async fn find_active_for_asset(&self, asset_id: AssetId) -> DomainResult<Option<Allocation>>;

    /// Persists a closed allocation (status, return date, remarks).
    async fn update(&self, allocation: &Allocation) -> DomainResult<()>;

    /// Every allocation ever created for the asset, newest assignment first,
    /// with holder and assigner identities resolved.
    async fn history_for_asset(&self, asset_id: AssetId) -> DomainResult<Vec<AssetHistoryEntry>>;

    /// Every allocation where the user was the holder, newest first, with
    /// asset details resolved.
    async fn history_for_user(&self, user_id: UserId) -> DomainResult<Vec<UserHistoryEntry>>;
}

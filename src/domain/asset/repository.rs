use crate::domain::asset::entity::{Asset, AssetUpdate, NewAsset};
use crate::domain::asset::value_objects::{AssetId, AssetStatus, AssetType};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct AssetFilter {
    pub status: Option<AssetStatus>,
    pub asset_type: Option<AssetType>,
    pub department: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    pub fn offset(&self) -> u32 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// One bucket of an aggregation report (counts grouped by status, type or
/// department).
#[derive(Debug, Clone)]
pub struct GroupCount {
    pub label: String,
    pub count: i64,
}

#[async_trait]
pub trait AssetRepository: Send + Sync {
    async fn insert(&self, new_asset: NewAsset) -> DomainResult<Asset>;

    async fn find_by_id(&self, id: AssetId) -> DomainResult<Option<Asset>>;

    async fn update(&self, update: AssetUpdate) -> DomainResult<Asset>;

    /// Persists the (status, holder) pair computed by a lifecycle transition.
    async fn update_assignment(
        &self,
        id: AssetId,
        status: AssetStatus,
        assigned_to: Option<UserId>,
    ) -> DomainResult<()>;

    async fn delete(&self, id: AssetId) -> DomainResult<()>;

    /// Filtered page of assets, newest first, plus the unfiltered total.
    async fn list(&self, filter: AssetFilter, page: PageRequest)
    -> DomainResult<(Vec<Asset>, u64)>;

    async fn find_assigned_to(&self, user: UserId) -> DomainResult<Vec<Asset>>;

    async fn count_by_status(&self) -> DomainResult<Vec<GroupCount>>;

    async fn count_by_type(&self) -> DomainResult<Vec<GroupCount>>;

    async fn count_by_department(&self) -> DomainResult<Vec<GroupCount>>;

    async fn warranty_expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Asset>>;
}

use super::AllocationQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AssetHistoryEntryDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::asset::AssetId,
};

pub struct AssetHistoryQuery {
    pub asset_id: i64,
}

impl AllocationQueryService {
    /// Full custody history of one asset, newest assignment first. An
    /// unknown asset id simply yields an empty history.
    pub async fn history_for_asset(
        &self,
        actor: &AuthenticatedUser,
        query: AssetHistoryQuery,
    ) -> ApplicationResult<Vec<AssetHistoryEntryDto>> {
        ensure_capability(actor, "allocations", "read")?;

        let asset_id = AssetId::new(query.asset_id)?;
        let entries = self.allocation_repo.history_for_asset(asset_id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

use super::AssetQueryService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::{AssetDto, AuthenticatedUser},
    error::ApplicationResult,
};

impl AssetQueryService {
    /// Assets currently in the caller's custody.
    pub async fn my_assets(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<AssetDto>> {
        ensure_capability(actor, "assets", "read:own")?;

        let assets = self.asset_repo.find_assigned_to(actor.id).await?;
        Ok(assets.into_iter().map(AssetDto::from).collect())
    }
}

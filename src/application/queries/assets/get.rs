use super::AssetQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AssetDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::asset::AssetId,
};

pub struct GetAssetQuery {
    pub id: i64,
}

impl AssetQueryService {
    pub async fn get_asset(
        &self,
        actor: &AuthenticatedUser,
        query: GetAssetQuery,
    ) -> ApplicationResult<AssetDto> {
        ensure_capability(actor, "assets", "read")?;

        let id = AssetId::new(query.id)?;
        self.asset_repo
            .find_by_id(id)
            .await?
            .map(AssetDto::from)
            .ok_or_else(|| {
                ApplicationError::not_found(format!("asset not found with id {}", query.id))
            })
    }
}

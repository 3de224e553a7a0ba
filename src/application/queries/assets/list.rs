use super::AssetQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AssetDto, AuthenticatedUser, Page},
        error::ApplicationResult,
    },
    domain::asset::{AssetFilter, AssetStatus, AssetType, PageRequest},
};
use std::str::FromStr;

const MAX_LIMIT: u32 = 100;

pub struct ListAssetsQuery {
    pub status: Option<String>,
    pub asset_type: Option<String>,
    pub department: Option<String>,
    pub page: u32,
    pub limit: u32,
}

impl AssetQueryService {
    pub async fn list_assets(
        &self,
        actor: &AuthenticatedUser,
        query: ListAssetsQuery,
    ) -> ApplicationResult<Page<AssetDto>> {
        ensure_capability(actor, "assets", "read")?;

        let filter = AssetFilter {
            status: query.status.as_deref().map(AssetStatus::from_str).transpose()?,
            asset_type: query
                .asset_type
                .as_deref()
                .map(AssetType::from_str)
                .transpose()?,
            department: query.department,
        };
        let page = PageRequest {
            page: query.page.max(1),
            limit: query.limit.clamp(1, MAX_LIMIT),
        };

        let (assets, total) = self.asset_repo.list(filter, page).await?;
        let items: Vec<_> = assets.into_iter().map(AssetDto::from).collect();
        Ok(Page::new(items, total, page.page, page.limit))
    }
}

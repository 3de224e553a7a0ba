use std::sync::Arc;

use crate::domain::asset::AssetRepository;

pub struct AssetQueryService {
    pub(super) asset_repo: Arc<dyn AssetRepository>,
}

impl AssetQueryService {
    pub fn new(asset_repo: Arc<dyn AssetRepository>) -> Self {
        Self { asset_repo }
    }
}

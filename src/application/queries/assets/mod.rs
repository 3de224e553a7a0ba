mod get;
mod list;
mod my_assets;
mod service;

pub use get::GetAssetQuery;
pub use list::ListAssetsQuery;
pub use service::AssetQueryService;

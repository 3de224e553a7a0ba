pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Asset, AssetUpdate, NewAsset};
pub use repository::{AssetFilter, AssetRepository, GroupCount, PageRequest};
pub use value_objects::{AssetCost, AssetId, AssetStatus, AssetTag, AssetType};

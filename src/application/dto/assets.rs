use crate::domain::asset::{Asset, AssetStatus, AssetType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetDto {
    pub id: i64,
    pub asset_tag: String,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    #[serde(with = "serde_time")]
    pub purchase_date: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub warranty_expiry_date: DateTime<Utc>,
    pub vendor: String,
    pub cost: f64,
    pub department: String,
    pub status: AssetStatus,
    pub assigned_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Asset> for AssetDto {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id.into(),
            asset_tag: asset.tag.into(),
            asset_type: asset.asset_type,
            brand: asset.brand,
            model: asset.model,
            serial_number: asset.serial_number,
            purchase_date: asset.purchase_date,
            warranty_expiry_date: asset.warranty_expiry_date,
            vendor: asset.vendor,
            cost: asset.cost.into(),
            department: asset.department,
            status: asset.status,
            assigned_to: asset.assigned_to.map(Into::into),
            notes: asset.notes,
            created_at: asset.created_at,
        }
    }
}

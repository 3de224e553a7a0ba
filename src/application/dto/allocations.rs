use crate::domain::allocation::{
    Allocation, AllocationStatus, AssetHistoryEntry, AssetRef, PartyRef, UserHistoryEntry,
};
use crate::domain::asset::AssetType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AllocationDto {
    pub id: i64,
    pub asset_id: i64,
    pub assigned_to: i64,
    pub assigned_by: i64,
    #[serde(with = "serde_time")]
    pub assigned_date: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub return_date: Option<DateTime<Utc>>,
    pub status: AllocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl From<Allocation> for AllocationDto {
    fn from(allocation: Allocation) -> Self {
        Self {
            id: allocation.id.into(),
            asset_id: allocation.asset_id.into(),
            assigned_to: allocation.assigned_to.into(),
            assigned_by: allocation.assigned_by.into(),
            assigned_date: allocation.assigned_date,
            return_date: allocation.return_date,
            status: allocation.status,
            remarks: allocation.remarks,
        }
    }
}

/// A user reference with identity resolved; fields are null when the account
/// has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PartyDto {
    pub id: i64,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<PartyRef> for PartyDto {
    fn from(party: PartyRef) -> Self {
        Self {
            id: party.id.into(),
            name: party.name,
            email: party.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetSummaryDto {
    pub id: i64,
    pub asset_tag: String,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
}

impl From<AssetRef> for AssetSummaryDto {
    fn from(asset: AssetRef) -> Self {
        Self {
            id: asset.id.into(),
            asset_tag: asset.tag.into(),
            asset_type: asset.asset_type,
            brand: asset.brand,
            model: asset.model,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetHistoryEntryDto {
    pub id: i64,
    pub assigned_to: PartyDto,
    pub assigned_by: PartyDto,
    #[serde(with = "serde_time")]
    pub assigned_date: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub return_date: Option<DateTime<Utc>>,
    pub status: AllocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl From<AssetHistoryEntry> for AssetHistoryEntryDto {
    fn from(entry: AssetHistoryEntry) -> Self {
        Self {
            id: entry.allocation.id.into(),
            assigned_to: entry.assigned_to.into(),
            assigned_by: entry.assigned_by.into(),
            assigned_date: entry.allocation.assigned_date,
            return_date: entry.allocation.return_date,
            status: entry.allocation.status,
            remarks: entry.allocation.remarks,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyHistoryEntryDto {
    pub id: i64,
    pub asset: Option<AssetSummaryDto>,
    pub assigned_by: PartyDto,
    #[serde(with = "serde_time")]
    pub assigned_date: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub return_date: Option<DateTime<Utc>>,
    pub status: AllocationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl From<UserHistoryEntry> for MyHistoryEntryDto {
    fn from(entry: UserHistoryEntry) -> Self {
        Self {
            id: entry.allocation.id.into(),
            asset: entry.asset.map(Into::into),
            assigned_by: entry.assigned_by.into(),
            assigned_date: entry.allocation.assigned_date,
            return_date: entry.allocation.return_date,
            status: entry.allocation.status,
            remarks: entry.allocation.remarks,
        }
    }
}

use crate::domain::maintenance::{MaintenanceRecord, MaintenanceStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceDto {
    pub id: i64,
    pub asset_id: i64,
    #[serde(with = "serde_time")]
    pub maintenance_date: DateTime<Utc>,
    pub issue_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(with = "serde_time::option")]
    pub next_maintenance_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
}

impl From<MaintenanceRecord> for MaintenanceDto {
    fn from(record: MaintenanceRecord) -> Self {
        Self {
            id: record.id.into(),
            asset_id: record.asset_id.into(),
            maintenance_date: record.maintenance_date,
            issue_description: record.issue_description,
            vendor: record.vendor,
            cost: record.cost,
            next_maintenance_date: record.next_maintenance_date,
            status: record.status,
        }
    }
}

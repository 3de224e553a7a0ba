// src/domain/maintenance/entity.rs
use crate::domain::asset::AssetId;
use crate::domain::errors::{DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaintenanceId(pub i64);

impl MaintenanceId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("maintenance id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MaintenanceId> for i64 {
    fn from(value: MaintenanceId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
pub enum MaintenanceStatus {
    Open,
    Closed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaintenanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Open" => Ok(MaintenanceStatus::Open),
            "Closed" => Ok(MaintenanceStatus::Closed),
            other => Err(DomainError::Validation(format!(
                "unknown maintenance status '{other}'"
            ))),
        }
    }
}

/// One repair/service episode for an asset.
#[derive(Debug, Clone)]
pub struct MaintenanceRecord {
    pub id: MaintenanceId,
    pub asset_id: AssetId,
    pub maintenance_date: DateTime<Utc>,
    pub issue_description: String,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
}

impl MaintenanceRecord {
    /// Closing is independent of other possibly-open records for the asset.
    pub fn close(&mut self) {
        self.status = MaintenanceStatus::Closed;
    }
}

#[derive(Debug, Clone)]
pub struct NewMaintenanceRecord {
    pub asset_id: AssetId,
    pub maintenance_date: DateTime<Utc>,
    pub issue_description: String,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub next_maintenance_date: Option<DateTime<Utc>>,
    pub status: MaintenanceStatus,
}

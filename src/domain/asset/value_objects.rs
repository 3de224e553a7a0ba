// src/domain/asset/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId(pub i64);

impl AssetId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("asset id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AssetId> for i64 {
    fn from(value: AssetId) -> Self {
        value.0
    }
}

/// Unique business identifier of an asset (inventory sticker number).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetTag(String);

impl AssetTag {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("asset tag cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<AssetTag> for String {
    fn from(value: AssetTag) -> Self {
        value.0
    }
}

impl fmt::Display for AssetTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
pub enum AssetType {
    Laptop,
    Desktop,
    Server,
    Printer,
    #[serde(rename = "Software License")]
    SoftwareLicense,
    Other,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Laptop => "Laptop",
            AssetType::Desktop => "Desktop",
            AssetType::Server => "Server",
            AssetType::Printer => "Printer",
            AssetType::SoftwareLicense => "Software License",
            AssetType::Other => "Other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Laptop" => Ok(AssetType::Laptop),
            "Desktop" => Ok(AssetType::Desktop),
            "Server" => Ok(AssetType::Server),
            "Printer" => Ok(AssetType::Printer),
            "Software License" => Ok(AssetType::SoftwareLicense),
            "Other" => Ok(AssetType::Other),
            other => Err(DomainError::Validation(format!("unknown asset type '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
pub enum AssetStatus {
    Available,
    Assigned,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    Retired,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Available => "Available",
            AssetStatus::Assigned => "Assigned",
            AssetStatus::UnderMaintenance => "Under Maintenance",
            AssetStatus::Retired => "Retired",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(AssetStatus::Available),
            "Assigned" => Ok(AssetStatus::Assigned),
            "Under Maintenance" => Ok(AssetStatus::UnderMaintenance),
            "Retired" => Ok(AssetStatus::Retired),
            other => Err(DomainError::Validation(format!(
                "unknown asset status '{other}'"
            ))),
        }
    }
}

/// Purchase cost. Must be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssetCost(f64);

impl AssetCost {
    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() {
            return Err(DomainError::Validation("cost must be a finite number".into()));
        }
        if value < 0.0 {
            return Err(DomainError::Validation("cost cannot be negative".into()));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<AssetCost> for f64 {
    fn from(value: AssetCost) -> Self {
        value.0
    }
}

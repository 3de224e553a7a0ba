// src/domain/allocation/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AllocationId(pub i64);

impl AllocationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("allocation id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<AllocationId> for i64 {
    fn from(value: AllocationId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AllocationStatus {
    Assigned,
    Transferred,
    Returned,
    Retired,
}

impl AllocationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationStatus::Assigned => "assigned",
            AllocationStatus::Transferred => "transferred",
            AllocationStatus::Returned => "returned",
            AllocationStatus::Retired => "retired",
        }
    }

    /// The single non-terminal state: the allocation currently in force.
    pub fn is_active(&self) -> bool {
        matches!(self, AllocationStatus::Assigned)
    }
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AllocationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "assigned" => Ok(AllocationStatus::Assigned),
            "transferred" => Ok(AllocationStatus::Transferred),
            "returned" => Ok(AllocationStatus::Returned),
            "retired" => Ok(AllocationStatus::Retired),
            other => Err(DomainError::Validation(format!(
                "unknown allocation status '{other}'"
            ))),
        }
    }
}

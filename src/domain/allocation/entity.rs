// src/domain/allocation/entity.rs
use crate::domain::allocation::value_objects::{AllocationId, AllocationStatus};
use crate::domain::asset::{AssetId, AssetTag, AssetType};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// One custody interval of an asset by a user. Closed rows are never deleted;
/// they form the allocation history.
#[derive(Debug, Clone)]
pub struct Allocation {
    pub id: AllocationId,
    pub asset_id: AssetId,
    pub assigned_to: UserId,
    pub assigned_by: UserId,
    pub assigned_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub status: AllocationStatus,
    pub remarks: Option<String>,
}

impl Allocation {
    /// Ends the custody interval. `status` is the terminal state the interval
    /// moves to (`transferred` or `returned`).
    pub fn close(&mut self, status: AllocationStatus, return_date: DateTime<Utc>) {
        self.status = status;
        self.return_date = Some(return_date);
    }

    /// Concatenates the return remark onto whatever remarks the allocation
    /// already carried.
    pub fn append_return_remark(&mut self, remark: &str) {
        let existing = self.remarks.take().unwrap_or_default();
        self.remarks = Some(format!("{existing} | Return remark: {remark}"));
    }
}

#[derive(Debug, Clone)]
pub struct NewAllocation {
    pub asset_id: AssetId,
    pub assigned_to: UserId,
    pub assigned_by: UserId,
    pub assigned_date: DateTime<Utc>,
    pub status: AllocationStatus,
    pub remarks: Option<String>,
}

/// A user as it appears in resolved history entries. `None` fields mean the
/// referenced account was hard-deleted after the allocation was written.
#[derive(Debug, Clone)]
pub struct PartyRef {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Asset summary attached to a user's own history.
#[derive(Debug, Clone)]
pub struct AssetRef {
    pub id: AssetId,
    pub tag: AssetTag,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct AssetHistoryEntry {
    pub allocation: Allocation,
    pub assigned_to: PartyRef,
    pub assigned_by: PartyRef,
}

#[derive(Debug, Clone)]
pub struct UserHistoryEntry {
    pub allocation: Allocation,
    pub asset: Option<AssetRef>,
    pub assigned_by: PartyRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_allocation(remarks: Option<&str>) -> Allocation {
        Allocation {
            id: AllocationId::new(1).unwrap(),
            asset_id: AssetId::new(1).unwrap(),
            assigned_to: UserId::new(2).unwrap(),
            assigned_by: UserId::new(1).unwrap(),
            assigned_date: Utc::now(),
            return_date: None,
            status: AllocationStatus::Assigned,
            remarks: remarks.map(Into::into),
        }
    }

    #[test]
    fn close_sets_terminal_status_and_return_date() {
        let mut allocation = sample_allocation(None);
        let now = Utc::now();
        allocation.close(AllocationStatus::Transferred, now);
        assert_eq!(allocation.status, AllocationStatus::Transferred);
        assert_eq!(allocation.return_date, Some(now));
        assert!(!allocation.status.is_active());
    }

    #[test]
    fn return_remark_is_appended_to_existing_remarks() {
        let mut allocation = sample_allocation(Some("for the sales trip"));
        allocation.append_return_remark("screen scratched");
        assert_eq!(
            allocation.remarks.as_deref(),
            Some("for the sales trip | Return remark: screen scratched")
        );
    }

    #[test]
    fn return_remark_on_empty_remarks() {
        let mut allocation = sample_allocation(None);
        allocation.append_return_remark("ok");
        assert_eq!(allocation.remarks.as_deref(), Some(" | Return remark: ok"));
    }
}

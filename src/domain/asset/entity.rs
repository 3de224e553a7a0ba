// src/domain/asset/entity.rs
use crate::domain::asset::value_objects::{AssetCost, AssetId, AssetStatus, AssetTag, AssetType};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Asset {
    pub id: AssetId,
    pub tag: AssetTag,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: DateTime<Utc>,
    pub warranty_expiry_date: DateTime<Utc>,
    pub vendor: String,
    pub cost: AssetCost,
    pub department: String,
    pub status: AssetStatus,
    pub assigned_to: Option<UserId>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    /// Hands the asset to a user. Only an `Available` asset can be assigned.
    pub fn assign_to(&mut self, user: UserId) -> DomainResult<()> {
        if self.status != AssetStatus::Available {
            return Err(DomainError::InvalidState(
                "asset is not available for assignment".into(),
            ));
        }
        self.status = AssetStatus::Assigned;
        self.assigned_to = Some(user);
        Ok(())
    }

    /// Moves custody without touching the lifecycle status. A transfer on an
    /// asset that was never assigned keeps its current status.
    pub fn transfer_to(&mut self, user: UserId) {
        self.assigned_to = Some(user);
    }

    /// Returns the asset to the pool, whatever state it was in.
    pub fn release(&mut self) {
        self.status = AssetStatus::Available;
        self.assigned_to = None;
    }

    pub fn begin_maintenance(&mut self) {
        self.status = AssetStatus::UnderMaintenance;
    }

    /// Resets the status to `Available`, even when other maintenance records
    /// for this asset remain open.
    pub fn end_maintenance(&mut self) {
        self.status = AssetStatus::Available;
    }
}

#[derive(Debug, Clone)]
pub struct NewAsset {
    pub tag: AssetTag,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: DateTime<Utc>,
    pub warranty_expiry_date: DateTime<Utc>,
    pub vendor: String,
    pub cost: AssetCost,
    pub department: String,
    pub status: AssetStatus,
    pub assigned_to: Option<UserId>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AssetUpdate {
    pub id: AssetId,
    pub asset_type: Option<AssetType>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry_date: Option<DateTime<Utc>>,
    pub vendor: Option<String>,
    pub cost: Option<AssetCost>,
    pub department: Option<String>,
    pub status: Option<AssetStatus>,
    pub notes: Option<String>,
}

impl AssetUpdate {
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            asset_type: None,
            brand: None,
            model: None,
            serial_number: None,
            purchase_date: None,
            warranty_expiry_date: None,
            vendor: None,
            cost: None,
            department: None,
            status: None,
            notes: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.asset_type.is_none()
            && self.brand.is_none()
            && self.model.is_none()
            && self.serial_number.is_none()
            && self.purchase_date.is_none()
            && self.warranty_expiry_date.is_none()
            && self.vendor.is_none()
            && self.cost.is_none()
            && self.department.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_asset(status: AssetStatus, assigned_to: Option<UserId>) -> Asset {
        Asset {
            id: AssetId::new(1).unwrap(),
            tag: AssetTag::new("AST-0001").unwrap(),
            asset_type: AssetType::Laptop,
            brand: "Lenovo".into(),
            model: "T14".into(),
            serial_number: "SN-123".into(),
            purchase_date: Utc::now(),
            warranty_expiry_date: Utc::now(),
            vendor: "CDW".into(),
            cost: AssetCost::new(1200.0).unwrap(),
            department: "IT".into(),
            status,
            assigned_to,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn assign_requires_available() {
        let mut asset = sample_asset(AssetStatus::Available, None);
        let user = UserId::new(7).unwrap();
        asset.assign_to(user).unwrap();
        assert_eq!(asset.status, AssetStatus::Assigned);
        assert_eq!(asset.assigned_to, Some(user));
    }

    #[test]
    fn assign_rejects_non_available_states() {
        for status in [
            AssetStatus::Assigned,
            AssetStatus::UnderMaintenance,
            AssetStatus::Retired,
        ] {
            let mut asset = sample_asset(status, None);
            let err = asset.assign_to(UserId::new(7).unwrap()).unwrap_err();
            assert!(matches!(err, DomainError::InvalidState(_)));
            assert_eq!(asset.status, status);
            assert_eq!(asset.assigned_to, None);
        }
    }

    #[test]
    fn transfer_moves_holder_without_touching_status() {
        let holder = UserId::new(7).unwrap();
        let next = UserId::new(8).unwrap();
        let mut asset = sample_asset(AssetStatus::Assigned, Some(holder));
        asset.transfer_to(next);
        assert_eq!(asset.status, AssetStatus::Assigned);
        assert_eq!(asset.assigned_to, Some(next));

        // Transferring an unassigned asset keeps it Available; the transfer
        // flow accepts that combination.
        let mut orphan = sample_asset(AssetStatus::Available, None);
        orphan.transfer_to(next);
        assert_eq!(orphan.status, AssetStatus::Available);
        assert_eq!(orphan.assigned_to, Some(next));
    }

    #[test]
    fn release_always_frees_the_asset() {
        for status in [
            AssetStatus::Available,
            AssetStatus::Assigned,
            AssetStatus::UnderMaintenance,
        ] {
            let mut asset = sample_asset(status, Some(UserId::new(7).unwrap()));
            asset.release();
            assert_eq!(asset.status, AssetStatus::Available);
            assert_eq!(asset.assigned_to, None);
        }
    }

    #[test]
    fn maintenance_transitions_only_move_status() {
        let holder = UserId::new(7).unwrap();
        let mut asset = sample_asset(AssetStatus::Assigned, Some(holder));
        asset.begin_maintenance();
        assert_eq!(asset.status, AssetStatus::UnderMaintenance);
        assert_eq!(asset.assigned_to, Some(holder));

        asset.end_maintenance();
        assert_eq!(asset.status, AssetStatus::Available);
        assert_eq!(asset.assigned_to, Some(holder));
    }
}

// tests/support/mocks.rs
//
// In-memory doubles standing in for Postgres and the security ports. One
// `InMemoryStore` plays the database; the per-aggregate repos are thin views
// over it so a test can wire several services against the same state.
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicI64, Ordering},
};

use quartermaster::application::dto::{AuthTokenDto, AuthenticatedUser, TokenSubject};
use quartermaster::application::error::{ApplicationError, ApplicationResult};
use quartermaster::application::ports::security::{PasswordHasher, TokenManager};
use quartermaster::application::ports::time::Clock;
use quartermaster::domain::allocation::{
    Allocation, AllocationId, AllocationRepository, AllocationStatus, AssetHistoryEntry, AssetRef,
    NewAllocation, PartyRef, UserHistoryEntry,
};
use quartermaster::domain::asset::{
    Asset, AssetFilter, AssetId, AssetRepository, AssetStatus, AssetUpdate, GroupCount, NewAsset,
    PageRequest,
};
use quartermaster::domain::audit::{AuditLog, AuditLogCursor, AuditLogRepository};
use quartermaster::domain::errors::{DomainError, DomainResult};
use quartermaster::domain::maintenance::{
    MaintenanceId, MaintenanceRecord, MaintenanceRepository, MaintenanceStatus,
    NewMaintenanceRecord,
};
use quartermaster::domain::user::{NewUser, User, UserId, UserRepository, UserUpdate};

#[derive(Default)]
pub struct InMemoryStore {
    pub users: Mutex<HashMap<i64, User>>,
    pub assets: Mutex<HashMap<i64, Asset>>,
    pub allocations: Mutex<Vec<Allocation>>,
    pub maintenance: Mutex<Vec<MaintenanceRecord>>,
    pub audit: Mutex<Vec<AuditLog>>,
    next_user_id: AtomicI64,
    next_asset_id: AtomicI64,
    next_allocation_id: AtomicI64,
    next_maintenance_id: AtomicI64,
    next_audit_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn next(counter: &AtomicI64) -> i64 {
        counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn audit_actions(&self) -> Vec<String> {
        self.audit
            .lock()
            .unwrap()
            .iter()
            .map(|log| log.action.clone())
            .collect()
    }

    pub fn asset(&self, id: AssetId) -> Asset {
        self.assets
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned()
            .expect("asset missing from store")
    }

    pub fn allocations_for(&self, id: AssetId) -> Vec<Allocation> {
        self.allocations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.asset_id == id)
            .cloned()
            .collect()
    }
}

/* ------------------------------- users ------------------------------- */

pub struct InMemoryUserRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.0.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let id = InMemoryStore::next(&self.0.next_user_id);
        let user = User {
            id: UserId::new(id)?,
            employee_id: new_user.employee_id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            department: new_user.department,
            role: new_user.role,
            created_at: new_user.created_at,
        };
        self.0.users.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_email(
        &self,
        email: &quartermaster::domain::user::Email,
    ) -> DomainResult<Option<User>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.0.users.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.0.users.lock().unwrap();
        let user = users
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(department) = update.department {
            user.department = department;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(password_hash) = update.password_hash {
            user.password_hash = password_hash;
        }
        Ok(user.clone())
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        self.0
            .users
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("user not found".into()))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users: Vec<User> = self.0.users.lock().unwrap().values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn latest_employee_id(&self) -> DomainResult<Option<String>> {
        Ok(self
            .0
            .users
            .lock()
            .unwrap()
            .values()
            .map(|u| u.employee_id.as_str().to_string())
            .filter(|id| {
                id.strip_prefix("A-")
                    .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
            })
            .max())
    }
}

/* ------------------------------- assets ------------------------------- */

pub struct InMemoryAssetRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl AssetRepository for InMemoryAssetRepo {
    async fn insert(&self, new_asset: NewAsset) -> DomainResult<Asset> {
        let id = InMemoryStore::next(&self.0.next_asset_id);
        let asset = Asset {
            id: AssetId::new(id)?,
            tag: new_asset.tag,
            asset_type: new_asset.asset_type,
            brand: new_asset.brand,
            model: new_asset.model,
            serial_number: new_asset.serial_number,
            purchase_date: new_asset.purchase_date,
            warranty_expiry_date: new_asset.warranty_expiry_date,
            vendor: new_asset.vendor,
            cost: new_asset.cost,
            department: new_asset.department,
            status: new_asset.status,
            assigned_to: new_asset.assigned_to,
            notes: new_asset.notes,
            created_at: new_asset.created_at,
        };
        self.0.assets.lock().unwrap().insert(id, asset.clone());
        Ok(asset)
    }

    async fn find_by_id(&self, id: AssetId) -> DomainResult<Option<Asset>> {
        Ok(self.0.assets.lock().unwrap().get(&i64::from(id)).cloned())
    }

    async fn update(&self, update: AssetUpdate) -> DomainResult<Asset> {
        let mut assets = self.0.assets.lock().unwrap();
        let asset = assets
            .get_mut(&i64::from(update.id))
            .ok_or_else(|| DomainError::NotFound("asset not found".into()))?;

        if let Some(asset_type) = update.asset_type {
            asset.asset_type = asset_type;
        }
        if let Some(brand) = update.brand {
            asset.brand = brand;
        }
        if let Some(model) = update.model {
            asset.model = model;
        }
        if let Some(serial_number) = update.serial_number {
            asset.serial_number = serial_number;
        }
        if let Some(purchase_date) = update.purchase_date {
            asset.purchase_date = purchase_date;
        }
        if let Some(warranty_expiry_date) = update.warranty_expiry_date {
            asset.warranty_expiry_date = warranty_expiry_date;
        }
        if let Some(vendor) = update.vendor {
            asset.vendor = vendor;
        }
        if let Some(cost) = update.cost {
            asset.cost = cost;
        }
        if let Some(department) = update.department {
            asset.department = department;
        }
        if let Some(status) = update.status {
            asset.status = status;
        }
        if let Some(notes) = update.notes {
            asset.notes = Some(notes);
        }
        Ok(asset.clone())
    }

    async fn update_assignment(
        &self,
        id: AssetId,
        status: AssetStatus,
        assigned_to: Option<UserId>,
    ) -> DomainResult<()> {
        let mut assets = self.0.assets.lock().unwrap();
        let asset = assets
            .get_mut(&i64::from(id))
            .ok_or_else(|| DomainError::NotFound("asset not found".into()))?;
        asset.status = status;
        asset.assigned_to = assigned_to;
        Ok(())
    }

    async fn delete(&self, id: AssetId) -> DomainResult<()> {
        self.0
            .assets
            .lock()
            .unwrap()
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("asset not found".into()))
    }

    async fn list(
        &self,
        filter: AssetFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Asset>, u64)> {
        let mut assets: Vec<Asset> = self
            .0
            .assets
            .lock()
            .unwrap()
            .values()
            .filter(|a| filter.status.is_none_or(|s| a.status == s))
            .filter(|a| filter.asset_type.is_none_or(|t| a.asset_type == t))
            .filter(|a| {
                filter
                    .department
                    .as_deref()
                    .is_none_or(|d| a.department == d)
            })
            .cloned()
            .collect();
        assets.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = assets.len() as u64;
        let items = assets
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit as usize)
            .collect();
        Ok((items, total))
    }

    async fn find_assigned_to(&self, user: UserId) -> DomainResult<Vec<Asset>> {
        Ok(self
            .0
            .assets
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.assigned_to == Some(user))
            .cloned()
            .collect())
    }

    async fn count_by_status(&self) -> DomainResult<Vec<GroupCount>> {
        Ok(group_by(&self.0, |a| a.status.as_str().to_string()))
    }

    async fn count_by_type(&self) -> DomainResult<Vec<GroupCount>> {
        Ok(group_by(&self.0, |a| a.asset_type.as_str().to_string()))
    }

    async fn count_by_department(&self) -> DomainResult<Vec<GroupCount>> {
        Ok(group_by(&self.0, |a| a.department.clone()))
    }

    async fn warranty_expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Asset>> {
        Ok(self
            .0
            .assets
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.warranty_expiry_date >= from && a.warranty_expiry_date <= to)
            .cloned()
            .collect())
    }
}

fn group_by(store: &InMemoryStore, key: impl Fn(&Asset) -> String) -> Vec<GroupCount> {
    let mut counts: HashMap<String, i64> = HashMap::new();
    for asset in store.assets.lock().unwrap().values() {
        *counts.entry(key(asset)).or_default() += 1;
    }
    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(label, count)| GroupCount { label, count })
        .collect();
    groups.sort_by(|a, b| a.label.cmp(&b.label));
    groups
}

/* ----------------------------- allocations ----------------------------- */

pub struct InMemoryAllocationRepo(pub Arc<InMemoryStore>);

impl InMemoryAllocationRepo {
    fn party(&self, id: UserId) -> PartyRef {
        let users = self.0.users.lock().unwrap();
        match users.get(&i64::from(id)) {
            Some(user) => PartyRef {
                id,
                name: Some(user.name.clone()),
                email: Some(user.email.as_str().to_string()),
            },
            None => PartyRef {
                id,
                name: None,
                email: None,
            },
        }
    }

    fn asset_ref(&self, id: AssetId) -> Option<AssetRef> {
        let assets = self.0.assets.lock().unwrap();
        assets.get(&i64::from(id)).map(|asset| AssetRef {
            id,
            tag: asset.tag.clone(),
            asset_type: asset.asset_type,
            brand: asset.brand.clone(),
            model: asset.model.clone(),
        })
    }

    fn sorted_history(&self, predicate: impl Fn(&Allocation) -> bool) -> Vec<Allocation> {
        let mut entries: Vec<Allocation> = self
            .0
            .allocations
            .lock()
            .unwrap()
            .iter()
            .filter(|a| predicate(a))
            .cloned()
            .collect();
        entries.sort_by(|a, b| {
            b.assigned_date
                .cmp(&a.assigned_date)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        entries
    }
}

#[async_trait]
impl AllocationRepository for InMemoryAllocationRepo {
    async fn insert(&self, new_allocation: NewAllocation) -> DomainResult<Allocation> {
        let id = InMemoryStore::next(&self.0.next_allocation_id);
        let allocation = Allocation {
            id: AllocationId::new(id)?,
            asset_id: new_allocation.asset_id,
            assigned_to: new_allocation.assigned_to,
            assigned_by: new_allocation.assigned_by,
            assigned_date: new_allocation.assigned_date,
            return_date: None,
            status: new_allocation.status,
            remarks: new_allocation.remarks,
        };
        self.0.allocations.lock().unwrap().push(allocation.clone());
        Ok(allocation)
    }

    async fn find_active_for_asset(&self, asset_id: AssetId) -> DomainResult<Option<Allocation>> {
        Ok(self
            .sorted_history(|a| a.asset_id == asset_id && a.status == AllocationStatus::Assigned)
            .into_iter()
            .next())
    }

    async fn update(&self, allocation: &Allocation) -> DomainResult<()> {
        let mut allocations = self.0.allocations.lock().unwrap();
        let stored = allocations
            .iter_mut()
            .find(|a| a.id == allocation.id)
            .ok_or_else(|| DomainError::NotFound("allocation not found".into()))?;
        *stored = allocation.clone();
        Ok(())
    }

    async fn history_for_asset(&self, asset_id: AssetId) -> DomainResult<Vec<AssetHistoryEntry>> {
        Ok(self
            .sorted_history(|a| a.asset_id == asset_id)
            .into_iter()
            .map(|allocation| AssetHistoryEntry {
                assigned_to: self.party(allocation.assigned_to),
                assigned_by: self.party(allocation.assigned_by),
                allocation,
            })
            .collect())
    }

    async fn history_for_user(&self, user_id: UserId) -> DomainResult<Vec<UserHistoryEntry>> {
        Ok(self
            .sorted_history(|a| a.assigned_to == user_id)
            .into_iter()
            .map(|allocation| UserHistoryEntry {
                asset: self.asset_ref(allocation.asset_id),
                assigned_by: self.party(allocation.assigned_by),
                allocation,
            })
            .collect())
    }
}

/* ----------------------------- maintenance ----------------------------- */

pub struct InMemoryMaintenanceRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl MaintenanceRepository for InMemoryMaintenanceRepo {
    async fn insert(&self, record: NewMaintenanceRecord) -> DomainResult<MaintenanceRecord> {
        let id = InMemoryStore::next(&self.0.next_maintenance_id);
        let record = MaintenanceRecord {
            id: MaintenanceId::new(id)?,
            asset_id: record.asset_id,
            maintenance_date: record.maintenance_date,
            issue_description: record.issue_description,
            vendor: record.vendor,
            cost: record.cost,
            next_maintenance_date: record.next_maintenance_date,
            status: record.status,
        };
        self.0.maintenance.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: MaintenanceId) -> DomainResult<Option<MaintenanceRecord>> {
        Ok(self
            .0
            .maintenance
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn update(&self, record: &MaintenanceRecord) -> DomainResult<()> {
        let mut records = self.0.maintenance.lock().unwrap();
        let stored = records
            .iter_mut()
            .find(|r| r.id == record.id)
            .ok_or_else(|| DomainError::NotFound("maintenance record not found".into()))?;
        *stored = record.clone();
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<MaintenanceRecord>> {
        Ok(self.0.maintenance.lock().unwrap().clone())
    }

    async fn list_for_asset(&self, asset_id: AssetId) -> DomainResult<Vec<MaintenanceRecord>> {
        Ok(self
            .0
            .maintenance
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.asset_id == asset_id)
            .cloned()
            .collect())
    }

    async fn list_open(&self) -> DomainResult<Vec<MaintenanceRecord>> {
        Ok(self
            .0
            .maintenance
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == MaintenanceStatus::Open)
            .cloned()
            .collect())
    }
}

/* -------------------------------- audit -------------------------------- */

/// Captures inserted audit rows and serves the keyset listing over them.
pub struct CapturingAuditRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl AuditLogRepository for CapturingAuditRepo {
    async fn insert(&self, mut log: AuditLog) -> DomainResult<()> {
        log.id = Some(InMemoryStore::next(&self.0.next_audit_id));
        self.0.audit.lock().unwrap().push(log);
        Ok(())
    }

    async fn list(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<String>)> {
        let mut logs: Vec<AuditLog> = self.0.audit.lock().unwrap().clone();
        logs.sort_by(|a, b| {
            b.timestamp
                .cmp(&a.timestamp)
                .then_with(|| b.id.cmp(&a.id))
        });
        if let Some(cursor) = cursor {
            logs.retain(|log| {
                log.timestamp < cursor.timestamp
                    || (log.timestamp == cursor.timestamp && log.id.unwrap_or(0) < cursor.id)
            });
        }

        let has_more = logs.len() > limit as usize;
        logs.truncate(limit as usize);
        let next_cursor = if has_more {
            logs.last()
                .and_then(|last| last.id.map(|id| AuditLogCursor::new(last.timestamp, id).encode()))
        } else {
            None
        };
        Ok((logs, next_cursor))
    }
}

/* -------------------------------- ports -------------------------------- */

/// Deterministic clock that advances one second per observation, so rows
/// written back-to-back get distinct, ordered timestamps.
pub struct SteppingClock {
    current: Mutex<DateTime<Utc>>,
}

impl SteppingClock {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }
}

impl Default for SteppingClock {
    fn default() -> Self {
        Self::starting_at(Utc::now())
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let mut current = self.current.lock().unwrap();
        let now = *current;
        *current += Duration::seconds(1);
        now
    }
}

pub struct DummyPasswordHasher;

#[async_trait]
impl PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hashed:{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let now = Utc::now();
        Ok(AuthTokenDto {
            token: "test-token".into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, _token: &str) -> ApplicationResult<AuthenticatedUser> {
        Err(ApplicationError::unauthorized(
            "dummy token manager cannot authenticate",
        ))
    }
}

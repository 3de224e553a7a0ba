// tests/support/builders.rs
use chrono::{Duration, Utc};
use std::sync::Arc;

use quartermaster::application::dto::AuthenticatedUser;
use quartermaster::application::services::asset_locks::AssetLocks;
use quartermaster::domain::asset::{Asset, AssetCost, AssetId, AssetStatus, AssetTag, AssetType};
use quartermaster::domain::user::{Role, UserId};

use super::mocks::InMemoryStore;

pub fn admin_actor(id: i64) -> AuthenticatedUser {
    actor(id, Role::Admin)
}

pub fn employee_actor(id: i64) -> AuthenticatedUser {
    actor(id, Role::Employee)
}

fn actor(id: i64, role: Role) -> AuthenticatedUser {
    let now = Utc::now();
    AuthenticatedUser {
        id: UserId::new(id).unwrap(),
        name: format!("user-{id}"),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

/// Seeds an asset directly into the store and returns its id.
pub fn seed_asset(store: &Arc<InMemoryStore>, id: i64, tag: &str, status: AssetStatus) -> AssetId {
    seed_asset_held_by(store, id, tag, status, None)
}

pub fn seed_asset_held_by(
    store: &Arc<InMemoryStore>,
    id: i64,
    tag: &str,
    status: AssetStatus,
    assigned_to: Option<i64>,
) -> AssetId {
    let asset_id = AssetId::new(id).unwrap();
    let now = Utc::now();
    let asset = Asset {
        id: asset_id,
        tag: AssetTag::new(tag).unwrap(),
        asset_type: AssetType::Laptop,
        brand: "Lenovo".into(),
        model: "T14".into(),
        serial_number: format!("SN-{id:04}"),
        purchase_date: now - Duration::days(90),
        warranty_expiry_date: now + Duration::days(275),
        vendor: "CDW".into(),
        cost: AssetCost::new(1450.0).unwrap(),
        department: "IT".into(),
        status,
        assigned_to: assigned_to.map(|uid| UserId::new(uid).unwrap()),
        notes: None,
        created_at: now,
    };
    store.assets.lock().unwrap().insert(id, asset);
    asset_id
}

pub fn shared_locks() -> Arc<AssetLocks> {
    Arc::new(AssetLocks::new())
}

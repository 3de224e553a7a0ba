use std::sync::Arc;

mod support;

use chrono::{TimeZone, Utc};

use quartermaster::application::commands::allocations::{
    AssignAssetCommand, ReturnAssetCommand, TransferAssetCommand,
};
use quartermaster::application::commands::assets::CreateAssetCommand;
use quartermaster::application::commands::users::CreateUserCommand;
use quartermaster::application::queries::allocations::AssetHistoryQuery;
use quartermaster::application::queries::audit::ListAuditLogsQuery;
use quartermaster::application::services::ApplicationServices;
use quartermaster::domain::allocation::AllocationStatus;
use quartermaster::domain::asset::{AssetId, AssetStatus};

use support::{
    CapturingAuditRepo, DummyPasswordHasher, DummyTokenManager, InMemoryAllocationRepo,
    InMemoryAssetRepo, InMemoryMaintenanceRepo, InMemoryStore, InMemoryUserRepo, SteppingClock,
    admin_actor, employee_actor,
};

fn services_over(store: &Arc<InMemoryStore>) -> ApplicationServices {
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
    ApplicationServices::new(
        Arc::new(InMemoryUserRepo(Arc::clone(store))),
        Arc::new(InMemoryAssetRepo(Arc::clone(store))),
        Arc::new(InMemoryAllocationRepo(Arc::clone(store))),
        Arc::new(InMemoryMaintenanceRepo(Arc::clone(store))),
        Arc::new(CapturingAuditRepo(Arc::clone(store))),
        Arc::new(DummyPasswordHasher),
        Arc::new(DummyTokenManager),
        Arc::new(SteppingClock::starting_at(start)),
    )
}

fn laptop_command(tag: &str) -> CreateAssetCommand {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    CreateAssetCommand {
        asset_tag: tag.into(),
        asset_type: "Laptop".into(),
        brand: "Dell".into(),
        model: "Latitude 5440".into(),
        serial_number: "SN-9913".into(),
        purchase_date: now,
        warranty_expiry_date: now + chrono::Duration::days(365),
        vendor: "CDW".into(),
        cost: 1380.0,
        department: "Sales".into(),
        notes: None,
    }
}

#[tokio::test]
async fn full_lifecycle_leaves_consistent_history_and_audit_trail() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let admin = admin_actor(1);

    let asset = services
        .asset_commands
        .create_asset(&admin, laptop_command("AST-0100"))
        .await
        .unwrap();
    assert_eq!(asset.status, AssetStatus::Available);

    services
        .allocation_commands
        .assign(
            &admin,
            AssignAssetCommand {
                asset_id: asset.id,
                assigned_to: 7,
                remarks: None,
                assigned_date: None,
            },
        )
        .await
        .unwrap();

    services
        .allocation_commands
        .transfer(
            &admin,
            TransferAssetCommand {
                asset_id: asset.id,
                from_user: 7,
                to_user: 8,
                remarks: None,
                transfer_date: None,
            },
        )
        .await
        .unwrap();

    services
        .allocation_commands
        .return_asset(
            &admin,
            ReturnAssetCommand {
                asset_id: asset.id,
                return_date: None,
                remarks: None,
            },
        )
        .await
        .unwrap();

    // Assign and transfer each open one custody interval; return closes the
    // last of them. Newest first.
    let history = services
        .allocation_queries
        .history_for_asset(&admin, AssetHistoryQuery { asset_id: asset.id })
        .await
        .unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].status, AllocationStatus::Returned);
    assert_eq!(history[1].status, AllocationStatus::Transferred);
    assert!(history[0].assigned_date > history[1].assigned_date);
    assert!(history.iter().all(|entry| entry.return_date.is_some()));

    let final_asset = store.asset(AssetId::new(asset.id).unwrap());
    assert_eq!(final_asset.status, AssetStatus::Available);
    assert_eq!(final_asset.assigned_to, None);

    assert_eq!(
        store.audit_actions(),
        vec!["CREATE", "ASSIGN", "TRANSFER", "RETURN"]
    );
}

#[tokio::test]
async fn my_history_resolves_asset_details_for_the_holder() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let admin = admin_actor(1);

    let asset = services
        .asset_commands
        .create_asset(&admin, laptop_command("AST-0200"))
        .await
        .unwrap();

    services
        .allocation_commands
        .assign(
            &admin,
            AssignAssetCommand {
                asset_id: asset.id,
                assigned_to: 7,
                remarks: None,
                assigned_date: None,
            },
        )
        .await
        .unwrap();

    let holder = employee_actor(7);
    let history = services
        .allocation_queries
        .my_history(&holder)
        .await
        .unwrap();

    assert_eq!(history.len(), 1);
    let entry = &history[0];
    assert_eq!(entry.status, AllocationStatus::Assigned);
    let summary = entry.asset.as_ref().expect("asset should resolve");
    assert_eq!(summary.asset_tag, "AST-0200");
}

#[tokio::test]
async fn audit_trail_pages_backwards_through_the_cursor() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let admin = admin_actor(1);

    for n in 0..5 {
        services
            .asset_commands
            .create_asset(&admin, laptop_command(&format!("AST-03{n:02}")))
            .await
            .unwrap();
    }

    let first_page = services
        .audit_queries
        .list_audit_logs(
            &admin,
            ListAuditLogsQuery {
                limit: Some(2),
                cursor: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(first_page.items.len(), 2);
    assert!(first_page.has_more);

    let second_page = services
        .audit_queries
        .list_audit_logs(
            &admin,
            ListAuditLogsQuery {
                limit: Some(2),
                cursor: first_page.next_cursor.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(second_page.items.len(), 2);

    // Strictly older than everything on the first page, no overlap.
    let newest_on_second = second_page.items[0].timestamp;
    let oldest_on_first = first_page.items[1].timestamp;
    assert!(newest_on_second < oldest_on_first);

    let third_page = services
        .audit_queries
        .list_audit_logs(
            &admin,
            ListAuditLogsQuery {
                limit: Some(2),
                cursor: second_page.next_cursor.clone(),
            },
        )
        .await
        .unwrap();
    assert_eq!(third_page.items.len(), 1);
    assert!(!third_page.has_more);
}

#[tokio::test]
async fn admin_created_accounts_get_sequential_employee_ids() {
    let store = InMemoryStore::new();
    let services = services_over(&store);
    let admin = admin_actor(1);

    let first = services
        .user_commands
        .create_user(
            &admin,
            CreateUserCommand {
                name: "John Doe".into(),
                email: "john@example.com".into(),
                password: "password123".into(),
                department: "Sales".into(),
                role: None,
            },
        )
        .await
        .unwrap();
    let second = services
        .user_commands
        .create_user(
            &admin,
            CreateUserCommand {
                name: "Jane Smith".into(),
                email: "jane@example.com".into(),
                password: "password123".into(),
                department: "Finance".into(),
                role: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(first.employee_id, "A-001");
    assert_eq!(second.employee_id, "A-002");
}

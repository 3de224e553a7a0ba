// src/application/services/mod.rs
pub mod asset_locks;

use std::sync::Arc;

use crate::{
    application::{
        commands::{
            allocations::AllocationCommandService, assets::AssetCommandService,
            maintenance::MaintenanceCommandService, users::UserCommandService,
        },
        ports::{
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            allocations::AllocationQueryService, assets::AssetQueryService,
            audit::AuditQueryService, maintenance::MaintenanceQueryService,
            reports::ReportQueryService, users::UserQueryService,
        },
        services::asset_locks::AssetLocks,
    },
    domain::{
        allocation::AllocationRepository,
        asset::AssetRepository,
        audit::AuditLogRepository,
        maintenance::MaintenanceRepository,
        user::{EmployeeIdService, UserRepository},
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub asset_commands: Arc<AssetCommandService>,
    pub allocation_commands: Arc<AllocationCommandService>,
    pub maintenance_commands: Arc<MaintenanceCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub asset_queries: Arc<AssetQueryService>,
    pub allocation_queries: Arc<AllocationQueryService>,
    pub maintenance_queries: Arc<MaintenanceQueryService>,
    pub audit_queries: Arc<AuditQueryService>,
    pub report_queries: Arc<ReportQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        asset_repo: Arc<dyn AssetRepository>,
        allocation_repo: Arc<dyn AllocationRepository>,
        maintenance_repo: Arc<dyn MaintenanceRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let employee_ids = Arc::new(EmployeeIdService::new(Arc::clone(&user_repo)));
        // One lock registry shared by every service that mutates assets.
        let locks = Arc::new(AssetLocks::new());

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_manager),
            Arc::clone(&employee_ids),
            Arc::clone(&clock),
        ));

        let asset_commands = Arc::new(AssetCommandService::new(
            Arc::clone(&asset_repo),
            Arc::clone(&audit_repo),
            Arc::clone(&clock),
        ));

        let allocation_commands = Arc::new(AllocationCommandService::new(
            Arc::clone(&asset_repo),
            Arc::clone(&allocation_repo),
            Arc::clone(&audit_repo),
            Arc::clone(&clock),
            Arc::clone(&locks),
        ));

        let maintenance_commands = Arc::new(MaintenanceCommandService::new(
            Arc::clone(&maintenance_repo),
            Arc::clone(&asset_repo),
            Arc::clone(&audit_repo),
            Arc::clone(&clock),
            Arc::clone(&locks),
        ));

        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));
        let asset_queries = Arc::new(AssetQueryService::new(Arc::clone(&asset_repo)));
        let allocation_queries =
            Arc::new(AllocationQueryService::new(Arc::clone(&allocation_repo)));
        let maintenance_queries =
            Arc::new(MaintenanceQueryService::new(Arc::clone(&maintenance_repo)));
        let audit_queries = Arc::new(AuditQueryService::new(Arc::clone(&audit_repo)));
        let report_queries = Arc::new(ReportQueryService::new(
            Arc::clone(&asset_repo),
            Arc::clone(&maintenance_repo),
            Arc::clone(&clock),
        ));

        Self {
            user_commands,
            asset_commands,
            allocation_commands,
            maintenance_commands,
            user_queries,
            asset_queries,
            allocation_queries,
            maintenance_queries,
            audit_queries,
            report_queries,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }
}

pub mod allocations;
pub mod assets;
pub mod audit;
pub mod auth;
pub mod maintenance;
pub mod pagination;
pub mod reports;
pub mod serde_time;
pub mod users;

pub use allocations::{
    AllocationDto, AssetHistoryEntryDto, AssetSummaryDto, MyHistoryEntryDto, PartyDto,
};
pub use assets::AssetDto;
pub use audit::AuditLogDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use maintenance::MaintenanceDto;
pub use pagination::{CursorPage, Page};
pub use reports::{GroupCountDto, InventoryReportDto};
pub use users::{CapabilityView, UserDto, UserProfileDto};

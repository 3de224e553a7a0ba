use crate::domain::audit::cursor::AuditLogCursor;
use crate::domain::audit::entity::AuditLog;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// The event sink every mutating action reports to. Insert-only by design;
/// `list` pages backwards through the trail, newest first.
#[async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn insert(&self, log: AuditLog) -> DomainResult<()>;

    async fn list(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<String>)>;
}

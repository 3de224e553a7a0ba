use super::AuditQueryService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuditLogDto, AuthenticatedUser, CursorPage},
        error::{ApplicationError, ApplicationResult},
    },
    domain::audit::AuditLogCursor,
};

const DEFAULT_LIMIT: u32 = 100;
const MAX_LIMIT: u32 = 100;

pub struct ListAuditLogsQuery {
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl AuditQueryService {
    pub async fn list_audit_logs(
        &self,
        actor: &AuthenticatedUser,
        query: ListAuditLogsQuery,
    ) -> ApplicationResult<CursorPage<AuditLogDto>> {
        ensure_capability(actor, "audit", "read")?;

        let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let cursor = query
            .cursor
            .as_deref()
            .map(AuditLogCursor::decode)
            .transpose()
            .map_err(ApplicationError::from)?;

        let (items, next_cursor) = self.repo.list(limit, cursor).await?;
        let dtos: Vec<_> = items.into_iter().map(Into::<AuditLogDto>::into).collect();
        Ok(CursorPage::new(dtos, next_cursor))
    }
}

// src/infrastructure/repositories/postgres_audit_log.rs
use super::error::map_sqlx;
use crate::domain::audit::{AuditLog, AuditLogCursor, AuditLogRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAuditLogRepository {
    pool: PgPool,
}

impl PostgresAuditLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuditLogRow {
    id: i64,
    action: String,
    performed_by: i64,
    entity_type: String,
    entity_id: Option<i64>,
    description: String,
    timestamp: DateTime<Utc>,
}

impl TryFrom<AuditLogRow> for AuditLog {
    type Error = DomainError;

    fn try_from(row: AuditLogRow) -> Result<Self, Self::Error> {
        Ok(AuditLog {
            id: Some(row.id),
            action: row.action,
            performed_by: UserId::new(row.performed_by)?,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            description: row.description,
            timestamp: row.timestamp,
        })
    }
}

#[async_trait]
impl AuditLogRepository for PostgresAuditLogRepository {
    async fn insert(&self, log: AuditLog) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO audit_logs (action, performed_by, entity_type, entity_id, description, timestamp)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(log.action)
        .bind(i64::from(log.performed_by))
        .bind(log.entity_type)
        .bind(log.entity_id)
        .bind(log.description)
        .bind(log.timestamp)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list(
        &self,
        limit: u32,
        cursor: Option<AuditLogCursor>,
    ) -> DomainResult<(Vec<AuditLog>, Option<String>)> {
        // Fetch one extra row to know whether another page exists.
        let fetch = i64::from(limit) + 1;
        let (cursor_ts, cursor_id) = match cursor {
            Some(cursor) => (Some(cursor.timestamp), cursor.id),
            None => (None, 0),
        };

        let rows = sqlx::query_as::<_, AuditLogRow>(
            "SELECT id, action, performed_by, entity_type, entity_id, description, timestamp
             FROM audit_logs
             WHERE ($2::timestamptz IS NULL
                    OR timestamp < $2
                    OR (timestamp = $2 AND id < $3))
             ORDER BY timestamp DESC, id DESC
             LIMIT $1",
        )
        .bind(fetch)
        .bind(cursor_ts)
        .bind(cursor_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut logs: Vec<AuditLog> = rows
            .into_iter()
            .map(AuditLog::try_from)
            .collect::<Result<_, _>>()?;

        let next_cursor = if logs.len() > limit as usize {
            logs.truncate(limit as usize);
            logs.last().and_then(|last| {
                last.id
                    .map(|id| AuditLogCursor::new(last.timestamp, id).encode())
            })
        } else {
            None
        };

        Ok((logs, next_cursor))
    }
}

// src/domain/audit/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// Append-only record of who did what to which entity. Rows are written after
/// the mutating action succeeds and are never updated or deleted.
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub id: Option<i64>,
    pub action: String,
    pub performed_by: UserId,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

use crate::domain::audit::AuditLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuditLogDto {
    pub id: i64,
    pub action: String,
    pub performed_by: i64,
    pub entity_type: String,
    pub entity_id: Option<i64>,
    pub description: String,
    #[serde(with = "serde_time")]
    pub timestamp: DateTime<Utc>,
}

impl From<AuditLog> for AuditLogDto {
    fn from(log: AuditLog) -> Self {
        Self {
            id: log.id.unwrap_or_default(),
            action: log.action,
            performed_by: log.performed_by.into(),
            entity_type: log.entity_type,
            entity_id: log.entity_id,
            description: log.description,
            timestamp: log.timestamp,
        }
    }
}

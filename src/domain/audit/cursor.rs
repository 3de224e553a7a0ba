// src/domain/audit/cursor.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position within the audit trail: the (timestamp, id) pair of the
/// last row already delivered. Encoded as an opaque base64 token.
#[derive(Debug, Clone)]
pub struct AuditLogCursor {
    pub timestamp: DateTime<Utc>,
    pub id: i64,
}

impl AuditLogCursor {
    pub fn new(timestamp: DateTime<Utc>, id: i64) -> Self {
        Self { timestamp, id }
    }

    pub fn encode(&self) -> String {
        let raw = format!("{}|{}", self.timestamp.to_rfc3339(), self.id);
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (timestamp_s, id_s) = raw.split_once('|').ok_or_else(invalid)?;
        let timestamp = DateTime::parse_from_rfc3339(timestamp_s)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id_s.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::new(timestamp, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_encoding() {
        let cursor = AuditLogCursor::new(Utc::now(), 42);
        let decoded = AuditLogCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded.id, cursor.id);
        assert_eq!(decoded.timestamp, cursor.timestamp);
    }

    #[test]
    fn rejects_garbage_tokens() {
        assert!(AuditLogCursor::decode("not-base64!").is_err());
        assert!(AuditLogCursor::decode(&URL_SAFE_NO_PAD.encode(b"no-separator")).is_err());
        assert!(AuditLogCursor::decode(&URL_SAFE_NO_PAD.encode(b"2024-01-01T00:00:00Z|x")).is_err());
    }
}

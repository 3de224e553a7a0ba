pub mod cursor;
pub mod entity;
pub mod repository;

pub use cursor::AuditLogCursor;
pub use entity::AuditLog;
pub use repository::AuditLogRepository;

// src/domain/user/services.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::value_objects::EmployeeId;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Issues sequential employee identifiers (`A-001`, `A-002`, ...).
///
/// The next identifier is derived from the greatest stored one; issuance is
/// serialized behind a mutex so two concurrent registrations cannot observe
/// the same predecessor.
pub struct EmployeeIdService {
    user_repo: Arc<dyn UserRepository>,
    issue_lock: Mutex<()>,
}

impl EmployeeIdService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            user_repo,
            issue_lock: Mutex::new(()),
        }
    }

    pub async fn next_id(&self) -> DomainResult<EmployeeId> {
        let _guard = self.issue_lock.lock().await;

        let next = match self.user_repo.latest_employee_id().await? {
            Some(last) => parse_sequence(&last)? + 1,
            None => 1,
        };

        EmployeeId::new(format_employee_id(next))
    }
}

fn parse_sequence(employee_id: &str) -> DomainResult<u64> {
    let suffix = employee_id.strip_prefix("A-").ok_or_else(|| {
        DomainError::DataIntegrity(format!("employee id '{employee_id}' lacks the 'A-' prefix"))
    })?;
    suffix.parse().map_err(|_| {
        DomainError::DataIntegrity(format!(
            "employee id '{employee_id}' has a non-numeric suffix"
        ))
    })
}

/// Zero-pads to three digits; wider sequences simply grow (`A-999` → `A-1000`).
fn format_employee_id(sequence: u64) -> String {
    format!("A-{sequence:03}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_three_digit_padding() {
        assert_eq!(format_employee_id(1), "A-001");
        assert_eq!(format_employee_id(41), "A-041");
        assert_eq!(format_employee_id(999), "A-999");
    }

    #[test]
    fn padding_stops_at_four_digits() {
        assert_eq!(format_employee_id(1000), "A-1000");
    }

    #[test]
    fn parses_numeric_suffix() {
        assert_eq!(parse_sequence("A-041").unwrap(), 41);
        assert_eq!(parse_sequence("A-1000").unwrap(), 1000);
    }

    #[test]
    fn malformed_suffix_is_a_data_integrity_error() {
        assert!(matches!(
            parse_sequence("A-04x"),
            Err(DomainError::DataIntegrity(_))
        ));
        assert!(matches!(
            parse_sequence("EMP001"),
            Err(DomainError::DataIntegrity(_))
        ));
    }
}

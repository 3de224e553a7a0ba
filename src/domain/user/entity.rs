// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, EmployeeId, PasswordHash, Role, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub employee_id: EmployeeId,
    pub name: String,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub department: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn set_password(&mut self, password_hash: PasswordHash) {
        self.password_hash = password_hash;
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub employee_id: EmployeeId,
    pub name: String,
    pub email: Email,
    pub password_hash: PasswordHash,
    pub department: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<Email>,
    pub department: Option<String>,
    pub role: Option<Role>,
    pub password_hash: Option<PasswordHash>,
}

impl UserUpdate {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            department: None,
            role: None,
            password_hash: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_password_hash(mut self, password_hash: PasswordHash) -> Self {
        self.password_hash = Some(password_hash);
        self
    }
}

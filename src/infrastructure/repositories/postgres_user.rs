// src/infrastructure/repositories/postgres_user.rs
use super::error::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{
    Email, EmployeeId, NewUser, PasswordHash, User, UserId, UserRepository, UserUpdate,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    employee_id: String,
    name: String,
    email: String,
    password_hash: String,
    department: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            employee_id: EmployeeId::new(row.employee_id)?,
            name: row.name,
            email: Email::new(row.email)?,
            password_hash: PasswordHash::new(row.password_hash)?,
            department: row.department,
            role: row.role.parse()?,
            created_at: row.created_at,
        })
    }
}

const USER_COLUMNS: &str =
    "id, employee_id, name, email, password_hash, department, role, created_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count(&self) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(1) FROM users")
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let NewUser {
            employee_id,
            name,
            email,
            password_hash,
            department,
            role,
            created_at,
        } = new_user;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (employee_id, name, email, password_hash, department, role, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id, employee_id, name, email, password_hash, department, role, created_at",
        )
        .bind(employee_id.as_str())
        .bind(&name)
        .bind(email.as_str())
        .bind(password_hash.as_str())
        .bind(&department)
        .bind(role.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                department = COALESCE($4, department),
                role = COALESCE($5, role),
                password_hash = COALESCE($6, password_hash)
             WHERE id = $1
             RETURNING id, employee_id, name, email, password_hash, department, role, created_at",
        )
        .bind(i64::from(update.id))
        .bind(update.name)
        .bind(update.email.map(String::from))
        .bind(update.department)
        .bind(update.role.map(|role| role.as_str().to_string()))
        .bind(update.password_hash.map(String::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("user not found".into()))?;

        User::try_from(row)
    }

    async fn delete(&self, id: UserId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("user not found".into()));
        }
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn latest_employee_id(&self) -> DomainResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT employee_id FROM users
             WHERE employee_id ~ '^A-[0-9]+$'
             ORDER BY employee_id DESC
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)
    }
}

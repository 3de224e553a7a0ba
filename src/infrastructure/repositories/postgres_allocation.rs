// src/infrastructure/repositories/postgres_allocation.rs
use super::error::map_sqlx;
use crate::domain::allocation::{
    Allocation, AllocationId, AllocationRepository, AssetHistoryEntry, AssetRef, NewAllocation,
    PartyRef, UserHistoryEntry,
};
use crate::domain::asset::{AssetId, AssetTag};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAllocationRepository {
    pool: PgPool,
}

impl PostgresAllocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AllocationRow {
    id: i64,
    asset_id: i64,
    assigned_to: i64,
    assigned_by: i64,
    assigned_date: DateTime<Utc>,
    return_date: Option<DateTime<Utc>>,
    status: String,
    remarks: Option<String>,
}

impl TryFrom<AllocationRow> for Allocation {
    type Error = DomainError;

    fn try_from(row: AllocationRow) -> Result<Self, Self::Error> {
        Ok(Allocation {
            id: AllocationId::new(row.id)?,
            asset_id: AssetId::new(row.asset_id)?,
            assigned_to: UserId::new(row.assigned_to)?,
            assigned_by: UserId::new(row.assigned_by)?,
            assigned_date: row.assigned_date,
            return_date: row.return_date,
            status: row.status.parse()?,
            remarks: row.remarks,
        })
    }
}

/// History row joined against the (possibly deleted) holder and assigner.
#[derive(Debug, FromRow)]
struct AssetHistoryRow {
    id: i64,
    asset_id: i64,
    assigned_to: i64,
    assigned_by: i64,
    assigned_date: DateTime<Utc>,
    return_date: Option<DateTime<Utc>>,
    status: String,
    remarks: Option<String>,
    assigned_to_name: Option<String>,
    assigned_to_email: Option<String>,
    assigned_by_name: Option<String>,
}

impl TryFrom<AssetHistoryRow> for AssetHistoryEntry {
    type Error = DomainError;

    fn try_from(row: AssetHistoryRow) -> Result<Self, Self::Error> {
        let assigned_to = PartyRef {
            id: UserId::new(row.assigned_to)?,
            name: row.assigned_to_name,
            email: row.assigned_to_email,
        };
        let assigned_by = PartyRef {
            id: UserId::new(row.assigned_by)?,
            name: row.assigned_by_name,
            email: None,
        };
        let allocation = Allocation {
            id: AllocationId::new(row.id)?,
            asset_id: AssetId::new(row.asset_id)?,
            assigned_to: assigned_to.id,
            assigned_by: assigned_by.id,
            assigned_date: row.assigned_date,
            return_date: row.return_date,
            status: row.status.parse()?,
            remarks: row.remarks,
        };
        Ok(AssetHistoryEntry {
            allocation,
            assigned_to,
            assigned_by,
        })
    }
}

#[derive(Debug, FromRow)]
struct UserHistoryRow {
    id: i64,
    asset_id: i64,
    assigned_to: i64,
    assigned_by: i64,
    assigned_date: DateTime<Utc>,
    return_date: Option<DateTime<Utc>>,
    status: String,
    remarks: Option<String>,
    assigned_by_name: Option<String>,
    asset_tag: Option<String>,
    asset_type: Option<String>,
    asset_brand: Option<String>,
    asset_model: Option<String>,
}

impl TryFrom<UserHistoryRow> for UserHistoryEntry {
    type Error = DomainError;

    fn try_from(row: UserHistoryRow) -> Result<Self, Self::Error> {
        let allocation = Allocation {
            id: AllocationId::new(row.id)?,
            asset_id: AssetId::new(row.asset_id)?,
            assigned_to: UserId::new(row.assigned_to)?,
            assigned_by: UserId::new(row.assigned_by)?,
            assigned_date: row.assigned_date,
            return_date: row.return_date,
            status: row.status.parse()?,
            remarks: row.remarks,
        };
        let asset = match (row.asset_tag, row.asset_type) {
            (Some(tag), Some(asset_type)) => Some(AssetRef {
                id: allocation.asset_id,
                tag: AssetTag::new(tag)?,
                asset_type: asset_type.parse()?,
                brand: row.asset_brand.unwrap_or_default(),
                model: row.asset_model.unwrap_or_default(),
            }),
            _ => None,
        };
        let assigned_by = PartyRef {
            id: allocation.assigned_by,
            name: row.assigned_by_name,
            email: None,
        };
        Ok(UserHistoryEntry {
            allocation,
            asset,
            assigned_by,
        })
    }
}

#[async_trait]
impl AllocationRepository for PostgresAllocationRepository {
    async fn insert(&self, new_allocation: NewAllocation) -> DomainResult<Allocation> {
        let row = sqlx::query_as::<_, AllocationRow>(
            "INSERT INTO allocations (asset_id, assigned_to, assigned_by, assigned_date, status, remarks)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, asset_id, assigned_to, assigned_by, assigned_date, return_date, status, remarks",
        )
        .bind(i64::from(new_allocation.asset_id))
        .bind(i64::from(new_allocation.assigned_to))
        .bind(i64::from(new_allocation.assigned_by))
        .bind(new_allocation.assigned_date)
        .bind(new_allocation.status.as_str())
        .bind(&new_allocation.remarks)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Allocation::try_from(row)
    }

    async fn find_active_for_asset(&self, asset_id: AssetId) -> DomainResult<Option<Allocation>> {
        let row = sqlx::query_as::<_, AllocationRow>(
            "SELECT id, asset_id, assigned_to, assigned_by, assigned_date, return_date, status, remarks
             FROM allocations
             WHERE asset_id = $1 AND status = 'assigned'
             ORDER BY assigned_date DESC, id DESC
             LIMIT 1",
        )
        .bind(i64::from(asset_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Allocation::try_from).transpose()
    }

    async fn update(&self, allocation: &Allocation) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE allocations SET status = $2, return_date = $3, remarks = $4 WHERE id = $1",
        )
        .bind(i64::from(allocation.id))
        .bind(allocation.status.as_str())
        .bind(allocation.return_date)
        .bind(&allocation.remarks)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("allocation not found".into()));
        }
        Ok(())
    }

    async fn history_for_asset(&self, asset_id: AssetId) -> DomainResult<Vec<AssetHistoryEntry>> {
        let rows = sqlx::query_as::<_, AssetHistoryRow>(
            "SELECT a.id, a.asset_id, a.assigned_to, a.assigned_by, a.assigned_date,
                    a.return_date, a.status, a.remarks,
                    tu.name AS assigned_to_name, tu.email AS assigned_to_email,
                    bu.name AS assigned_by_name
             FROM allocations a
             LEFT JOIN users tu ON tu.id = a.assigned_to
             LEFT JOIN users bu ON bu.id = a.assigned_by
             WHERE a.asset_id = $1
             ORDER BY a.assigned_date DESC, a.id ASC",
        )
        .bind(i64::from(asset_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(AssetHistoryEntry::try_from).collect()
    }

    async fn history_for_user(&self, user_id: UserId) -> DomainResult<Vec<UserHistoryEntry>> {
        let rows = sqlx::query_as::<_, UserHistoryRow>(
            "SELECT a.id, a.asset_id, a.assigned_to, a.assigned_by, a.assigned_date,
                    a.return_date, a.status, a.remarks,
                    bu.name AS assigned_by_name,
                    s.asset_tag AS asset_tag, s.asset_type AS asset_type,
                    s.brand AS asset_brand, s.model AS asset_model
             FROM allocations a
             LEFT JOIN users bu ON bu.id = a.assigned_by
             LEFT JOIN assets s ON s.id = a.asset_id
             WHERE a.assigned_to = $1
             ORDER BY a.assigned_date DESC, a.id ASC",
        )
        .bind(i64::from(user_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(UserHistoryEntry::try_from).collect()
    }
}

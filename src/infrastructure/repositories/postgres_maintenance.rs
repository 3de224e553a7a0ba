// src/infrastructure/repositories/postgres_maintenance.rs
use super::error::map_sqlx;
use crate::domain::asset::AssetId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::maintenance::{
    MaintenanceId, MaintenanceRecord, MaintenanceRepository, NewMaintenanceRecord,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresMaintenanceRepository {
    pool: PgPool,
}

impl PostgresMaintenanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MaintenanceRow {
    id: i64,
    asset_id: i64,
    maintenance_date: DateTime<Utc>,
    issue_description: String,
    vendor: Option<String>,
    cost: Option<f64>,
    next_maintenance_date: Option<DateTime<Utc>>,
    status: String,
}

impl TryFrom<MaintenanceRow> for MaintenanceRecord {
    type Error = DomainError;

    fn try_from(row: MaintenanceRow) -> Result<Self, Self::Error> {
        Ok(MaintenanceRecord {
            id: MaintenanceId::new(row.id)?,
            asset_id: AssetId::new(row.asset_id)?,
            maintenance_date: row.maintenance_date,
            issue_description: row.issue_description,
            vendor: row.vendor,
            cost: row.cost,
            next_maintenance_date: row.next_maintenance_date,
            status: row.status.parse()?,
        })
    }
}

const MAINTENANCE_COLUMNS: &str = "id, asset_id, maintenance_date, issue_description, vendor, \
     cost, next_maintenance_date, status";

#[async_trait]
impl MaintenanceRepository for PostgresMaintenanceRepository {
    async fn insert(&self, record: NewMaintenanceRecord) -> DomainResult<MaintenanceRecord> {
        let row = sqlx::query_as::<_, MaintenanceRow>(&format!(
            "INSERT INTO maintenance_records
                (asset_id, maintenance_date, issue_description, vendor, cost,
                 next_maintenance_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {MAINTENANCE_COLUMNS}"
        ))
        .bind(i64::from(record.asset_id))
        .bind(record.maintenance_date)
        .bind(&record.issue_description)
        .bind(&record.vendor)
        .bind(record.cost)
        .bind(record.next_maintenance_date)
        .bind(record.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        MaintenanceRecord::try_from(row)
    }

    async fn find_by_id(&self, id: MaintenanceId) -> DomainResult<Option<MaintenanceRecord>> {
        let row = sqlx::query_as::<_, MaintenanceRow>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(MaintenanceRecord::try_from).transpose()
    }

    async fn update(&self, record: &MaintenanceRecord) -> DomainResult<()> {
        let result = sqlx::query("UPDATE maintenance_records SET status = $2 WHERE id = $1")
            .bind(i64::from(record.id))
            .bind(record.status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("maintenance record not found".into()));
        }
        Ok(())
    }

    async fn list(&self) -> DomainResult<Vec<MaintenanceRecord>> {
        let rows = sqlx::query_as::<_, MaintenanceRow>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records
             ORDER BY maintenance_date DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MaintenanceRecord::try_from).collect()
    }

    async fn list_for_asset(&self, asset_id: AssetId) -> DomainResult<Vec<MaintenanceRecord>> {
        let rows = sqlx::query_as::<_, MaintenanceRow>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records
             WHERE asset_id = $1
             ORDER BY maintenance_date DESC, id DESC"
        ))
        .bind(i64::from(asset_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MaintenanceRecord::try_from).collect()
    }

    async fn list_open(&self) -> DomainResult<Vec<MaintenanceRecord>> {
        let rows = sqlx::query_as::<_, MaintenanceRow>(&format!(
            "SELECT {MAINTENANCE_COLUMNS} FROM maintenance_records
             WHERE status = 'Open'
             ORDER BY maintenance_date DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(MaintenanceRecord::try_from).collect()
    }
}

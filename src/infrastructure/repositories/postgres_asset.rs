// src/infrastructure/repositories/postgres_asset.rs
use super::error::map_sqlx;
use crate::domain::asset::{
    Asset, AssetCost, AssetFilter, AssetId, AssetRepository, AssetStatus, AssetTag, AssetUpdate,
    GroupCount, NewAsset, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresAssetRepository {
    pool: PgPool,
}

impl PostgresAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AssetRow {
    id: i64,
    asset_tag: String,
    asset_type: String,
    brand: String,
    model: String,
    serial_number: String,
    purchase_date: DateTime<Utc>,
    warranty_expiry_date: DateTime<Utc>,
    vendor: String,
    cost: f64,
    department: String,
    status: String,
    assigned_to: Option<i64>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AssetRow> for Asset {
    type Error = DomainError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        Ok(Asset {
            id: AssetId::new(row.id)?,
            tag: AssetTag::new(row.asset_tag)?,
            asset_type: row.asset_type.parse()?,
            brand: row.brand,
            model: row.model,
            serial_number: row.serial_number,
            purchase_date: row.purchase_date,
            warranty_expiry_date: row.warranty_expiry_date,
            vendor: row.vendor,
            cost: AssetCost::new(row.cost)?,
            department: row.department,
            status: row.status.parse()?,
            assigned_to: row.assigned_to.map(UserId::new).transpose()?,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

const ASSET_COLUMNS: &str = "id, asset_tag, asset_type, brand, model, serial_number, \
     purchase_date, warranty_expiry_date, vendor, cost, department, status, \
     assigned_to, notes, created_at";

#[async_trait]
impl AssetRepository for PostgresAssetRepository {
    async fn insert(&self, new_asset: NewAsset) -> DomainResult<Asset> {
        let row = sqlx::query_as::<_, AssetRow>(&format!(
            "INSERT INTO assets (asset_tag, asset_type, brand, model, serial_number,
                purchase_date, warranty_expiry_date, vendor, cost, department, status,
                assigned_to, notes, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {ASSET_COLUMNS}"
        ))
        .bind(new_asset.tag.as_str())
        .bind(new_asset.asset_type.as_str())
        .bind(&new_asset.brand)
        .bind(&new_asset.model)
        .bind(&new_asset.serial_number)
        .bind(new_asset.purchase_date)
        .bind(new_asset.warranty_expiry_date)
        .bind(&new_asset.vendor)
        .bind(f64::from(new_asset.cost))
        .bind(&new_asset.department)
        .bind(new_asset.status.as_str())
        .bind(new_asset.assigned_to.map(i64::from))
        .bind(&new_asset.notes)
        .bind(new_asset.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Asset::try_from(row)
    }

    async fn find_by_id(&self, id: AssetId) -> DomainResult<Option<Asset>> {
        let row = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Asset::try_from).transpose()
    }

    async fn update(&self, update: AssetUpdate) -> DomainResult<Asset> {
        let row = sqlx::query_as::<_, AssetRow>(&format!(
            "UPDATE assets SET
                asset_type = COALESCE($2, asset_type),
                brand = COALESCE($3, brand),
                model = COALESCE($4, model),
                serial_number = COALESCE($5, serial_number),
                purchase_date = COALESCE($6, purchase_date),
                warranty_expiry_date = COALESCE($7, warranty_expiry_date),
                vendor = COALESCE($8, vendor),
                cost = COALESCE($9, cost),
                department = COALESCE($10, department),
                status = COALESCE($11, status),
                notes = COALESCE($12, notes)
             WHERE id = $1
             RETURNING {ASSET_COLUMNS}"
        ))
        .bind(i64::from(update.id))
        .bind(update.asset_type.map(|t| t.as_str().to_string()))
        .bind(update.brand)
        .bind(update.model)
        .bind(update.serial_number)
        .bind(update.purchase_date)
        .bind(update.warranty_expiry_date)
        .bind(update.vendor)
        .bind(update.cost.map(f64::from))
        .bind(update.department)
        .bind(update.status.map(|s| s.as_str().to_string()))
        .bind(update.notes)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("asset not found".into()))?;

        Asset::try_from(row)
    }

    async fn update_assignment(
        &self,
        id: AssetId,
        status: AssetStatus,
        assigned_to: Option<UserId>,
    ) -> DomainResult<()> {
        let result = sqlx::query("UPDATE assets SET status = $2, assigned_to = $3 WHERE id = $1")
            .bind(i64::from(id))
            .bind(status.as_str())
            .bind(assigned_to.map(i64::from))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("asset not found".into()));
        }
        Ok(())
    }

    async fn delete(&self, id: AssetId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("asset not found".into()));
        }
        Ok(())
    }

    async fn list(
        &self,
        filter: AssetFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Asset>, u64)> {
        let status = filter.status.map(|s| s.as_str().to_string());
        let asset_type = filter.asset_type.map(|t| t.as_str().to_string());

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM assets
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::text IS NULL OR asset_type = $2)
               AND ($3::text IS NULL OR department = $3)",
        )
        .bind(&status)
        .bind(&asset_type)
        .bind(&filter.department)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets
             WHERE ($1::text IS NULL OR status = $1)
               AND ($2::text IS NULL OR asset_type = $2)
               AND ($3::text IS NULL OR department = $3)
             ORDER BY created_at DESC, id DESC
             LIMIT $4 OFFSET $5"
        ))
        .bind(&status)
        .bind(&asset_type)
        .bind(&filter.department)
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let assets: Vec<Asset> = rows
            .into_iter()
            .map(Asset::try_from)
            .collect::<Result<_, _>>()?;
        Ok((assets, total as u64))
    }

    async fn find_assigned_to(&self, user: UserId) -> DomainResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets WHERE assigned_to = $1 ORDER BY created_at DESC"
        ))
        .bind(i64::from(user))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Asset::try_from).collect()
    }

    async fn count_by_status(&self) -> DomainResult<Vec<GroupCount>> {
        self.group_counts("status").await
    }

    async fn count_by_type(&self) -> DomainResult<Vec<GroupCount>> {
        self.group_counts("asset_type").await
    }

    async fn count_by_department(&self) -> DomainResult<Vec<GroupCount>> {
        self.group_counts("department").await
    }

    async fn warranty_expiring_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> DomainResult<Vec<Asset>> {
        let rows = sqlx::query_as::<_, AssetRow>(&format!(
            "SELECT {ASSET_COLUMNS} FROM assets
             WHERE warranty_expiry_date >= $1 AND warranty_expiry_date <= $2
             ORDER BY warranty_expiry_date ASC"
        ))
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Asset::try_from).collect()
    }
}

impl PostgresAssetRepository {
    /// `column` is one of a fixed set of identifiers, never user input.
    async fn group_counts(&self, column: &str) -> DomainResult<Vec<GroupCount>> {
        let rows = sqlx::query_as::<_, (String, i64)>(&format!(
            "SELECT {column} AS label, COUNT(1) FROM assets GROUP BY {column} ORDER BY {column}"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|(label, count)| GroupCount { label, count })
            .collect())
    }
}

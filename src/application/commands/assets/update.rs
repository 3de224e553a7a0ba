// src/application/commands/assets/update.rs
use super::AssetCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AssetDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::asset::{AssetCost, AssetId, AssetStatus, AssetType, AssetUpdate},
};
use chrono::{DateTime, Utc};
use std::str::FromStr;

pub struct UpdateAssetCommand {
    pub id: i64,
    pub asset_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub warranty_expiry_date: Option<DateTime<Utc>>,
    pub vendor: Option<String>,
    pub cost: Option<f64>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl AssetCommandService {
    pub async fn update_asset(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateAssetCommand,
    ) -> ApplicationResult<AssetDto> {
        ensure_capability(actor, "assets", "update")?;

        let id = AssetId::new(command.id)?;
        self.asset_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("asset not found"))?;

        let mut update = AssetUpdate::new(id);
        if let Some(asset_type) = command.asset_type {
            update.asset_type = Some(AssetType::from_str(&asset_type)?);
        }
        if let Some(status) = command.status {
            update.status = Some(AssetStatus::from_str(&status)?);
        }
        if let Some(cost) = command.cost {
            update.cost = Some(AssetCost::new(cost)?);
        }
        update.brand = command.brand;
        update.model = command.model;
        update.serial_number = command.serial_number;
        update.purchase_date = command.purchase_date;
        update.warranty_expiry_date = command.warranty_expiry_date;
        update.vendor = command.vendor;
        update.department = command.department;
        update.notes = command.notes;

        if update.is_empty() {
            return Err(ApplicationError::validation("nothing to update"));
        }

        let updated = self.asset_repo.update(update).await?;

        self.record_audit(
            actor,
            "UPDATE",
            &updated,
            format!("Updated asset {}", updated.tag),
        )
        .await?;

        Ok(updated.into())
    }
}

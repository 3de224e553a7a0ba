// src/application/commands/assets/create.rs
use super::AssetCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AssetDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::asset::{AssetCost, AssetStatus, AssetTag, AssetType, NewAsset},
};
use chrono::{DateTime, Utc};
use std::str::FromStr;

pub struct CreateAssetCommand {
    pub asset_tag: String,
    pub asset_type: String,
    pub brand: String,
    pub model: String,
    pub serial_number: String,
    pub purchase_date: DateTime<Utc>,
    pub warranty_expiry_date: DateTime<Utc>,
    pub vendor: String,
    pub cost: f64,
    pub department: String,
    pub notes: Option<String>,
}

impl AssetCommandService {
    pub async fn create_asset(
        &self,
        actor: &AuthenticatedUser,
        command: CreateAssetCommand,
    ) -> ApplicationResult<AssetDto> {
        ensure_capability(actor, "assets", "create")?;

        let tag = AssetTag::new(command.asset_tag)?;
        let asset_type = AssetType::from_str(&command.asset_type)?;
        let cost = AssetCost::new(command.cost)?;
        let now = self.clock.now();

        let created = self
            .asset_repo
            .insert(NewAsset {
                tag,
                asset_type,
                brand: command.brand,
                model: command.model,
                serial_number: command.serial_number,
                purchase_date: command.purchase_date,
                warranty_expiry_date: command.warranty_expiry_date,
                vendor: command.vendor,
                cost,
                department: command.department,
                status: AssetStatus::Available,
                assigned_to: None,
                notes: command.notes,
                created_at: now,
            })
            .await?;

        self.record_audit(
            actor,
            "CREATE",
            &created,
            format!("Created asset {} ({})", created.tag, created.asset_type),
        )
        .await?;

        Ok(created.into())
    }
}

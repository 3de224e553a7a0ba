// src/application/commands/assets/delete.rs
use super::AssetCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::asset::AssetId,
};

pub struct DeleteAssetCommand {
    pub id: i64,
}

impl AssetCommandService {
    /// Hard delete; allocation history keeps referencing the removed id.
    pub async fn delete_asset(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteAssetCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "assets", "delete")?;

        let id = AssetId::new(command.id)?;
        let asset = self
            .asset_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("asset not found"))?;

        self.asset_repo.delete(id).await?;

        self.record_audit(
            actor,
            "DELETE",
            &asset,
            format!("Deleted asset {}", asset.tag),
        )
        .await?;

        Ok(())
    }
}

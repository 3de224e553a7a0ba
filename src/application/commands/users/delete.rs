// src/application/commands/users/delete.rs
use super::UserCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct DeleteUserCommand {
    pub user_id: i64,
}

impl UserCommandService {
    /// Hard delete. Allocation and audit rows keep the stale reference;
    /// history queries resolve it to a null party.
    pub async fn delete_user(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteUserCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "users", "delete")?;

        let id = UserId::new(command.user_id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        self.user_repo.delete(id).await
            .map_err(ApplicationError::from)
    }
}

// src/application/commands/users/update.rs
use super::UserCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, Role, UserId, UserUpdate},
};

pub struct UpdateUserCommand {
    pub user_id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub role: Option<Role>,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "update")?;

        let id = UserId::new(command.user_id)?;
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        let mut update = UserUpdate::new(id);
        if let Some(name) = command.name {
            update = update.with_name(name);
        }
        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(department) = command.department {
            update = update.with_department(department);
        }
        if let Some(role) = command.role {
            update = update.with_role(role);
        }

        let user = self.user_repo.update(update).await?;
        Ok(user.into())
    }
}

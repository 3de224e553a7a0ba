// src/application/commands/users/create.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Role},
};

pub struct CreateUserCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// Admin-side account creation; the employee id is always generated.
    pub async fn create_user(
        &self,
        actor: &AuthenticatedUser,
        command: CreateUserCommand,
    ) -> ApplicationResult<UserDto> {
        ensure_capability(actor, "users", "create")?;

        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        let employee_id = self.employee_ids.next_id().await?;
        let hashed = self.password_hasher.hash(&command.password).await?;

        let user = self
            .user_repo
            .insert(NewUser {
                employee_id,
                name: command.name,
                email,
                password_hash: PasswordHash::new(hashed)?,
                department: command.department,
                role: command.role.unwrap_or_default(),
                created_at: self.clock.now(),
            })
            .await?;

        Ok(user.into())
    }
}

// src/application/commands/users/register.rs
use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, EmployeeId, NewUser, PasswordHash, Role},
};

pub struct RegisterUserCommand {
    pub employee_id: Option<String>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub department: String,
    pub role: Option<Role>,
}

impl UserCommandService {
    /// The very first account becomes Admin so the system can be
    /// bootstrapped; afterwards registration requires `users:create`.
    pub async fn register(
        &self,
        actor: Option<&AuthenticatedUser>,
        command: RegisterUserCommand,
    ) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;
        let existing = self.user_repo.count().await?;
        let role = self.determine_role(existing, actor, command.role)?;

        self.ensure_email_available(existing, &email).await?;

        let employee_id = match command.employee_id {
            Some(supplied) => EmployeeId::new(supplied)?,
            None => self.employee_ids.next_id().await?,
        };

        let hashed = self.password_hasher.hash(&command.password).await?;
        let user = self
            .user_repo
            .insert(NewUser {
                employee_id,
                name: command.name,
                email,
                password_hash: PasswordHash::new(hashed)?,
                department: command.department,
                role,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(user.into())
    }

    fn determine_role(
        &self,
        existing: u64,
        actor: Option<&AuthenticatedUser>,
        role: Option<Role>,
    ) -> ApplicationResult<Role> {
        if existing == 0 {
            return Ok(Role::Admin);
        }
        let requester = actor
            .ok_or_else(|| ApplicationError::forbidden("administrative privileges are required"))?;
        ensure_capability(requester, "users", "create")?;
        Ok(role.unwrap_or(Role::Employee))
    }

    async fn ensure_email_available(&self, existing: u64, email: &Email) -> ApplicationResult<()> {
        if existing == 0 {
            return Ok(());
        }

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        Ok(())
    }
}

use super::UserQueryService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::{AuthenticatedUser, UserDto},
    error::ApplicationResult,
};

impl UserQueryService {
    pub async fn list_users(&self, actor: &AuthenticatedUser) -> ApplicationResult<Vec<UserDto>> {
        ensure_capability(actor, "users", "read")?;

        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}

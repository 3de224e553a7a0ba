use super::AllocationQueryService;
use crate::application::{
    commands::capability::ensure_capability,
    dto::{AuthenticatedUser, MyHistoryEntryDto},
    error::ApplicationResult,
};

impl AllocationQueryService {
    /// Allocations where the caller was the holder, newest first.
    pub async fn my_history(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<MyHistoryEntryDto>> {
        ensure_capability(actor, "allocations", "read:own")?;

        let entries = self.allocation_repo.history_for_user(actor.id).await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}

// src/application/services/asset_locks.rs
use crate::domain::asset::AssetId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Per-asset locks held across a lifecycle read-check-write sequence, so two
/// concurrent operations on the same asset cannot interleave (e.g. both
/// observing `Available` before either commits).
///
/// Entries are never reclaimed; the asset fleet is small and ids are reused
/// across requests.
#[derive(Default)]
pub struct AssetLocks {
    inner: Mutex<HashMap<i64, Arc<AsyncMutex<()>>>>,
}

impl AssetLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, asset_id: AssetId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self
                .inner
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            Arc::clone(
                map.entry(asset_id.into())
                    .or_insert_with(|| Arc::new(AsyncMutex::new(()))),
            )
        };
        lock.lock_owned().await
    }
}

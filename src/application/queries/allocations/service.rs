use std::sync::Arc;

use crate::domain::allocation::AllocationRepository;

pub struct AllocationQueryService {
    pub(super) allocation_repo: Arc<dyn AllocationRepository>,
}

impl AllocationQueryService {
    pub fn new(allocation_repo: Arc<dyn AllocationRepository>) -> Self {
        Self { allocation_repo }
    }
}

use crate::domain::asset::GroupCount;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupCountDto {
    pub label: String,
    pub count: i64,
}

impl From<GroupCount> for GroupCountDto {
    fn from(group: GroupCount) -> Self {
        Self {
            label: group.label,
            count: group.count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InventoryReportDto {
    pub status_stats: Vec<GroupCountDto>,
    pub type_stats: Vec<GroupCountDto>,
    pub department_stats: Vec<GroupCountDto>,
}

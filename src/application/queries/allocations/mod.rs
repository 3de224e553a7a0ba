mod history;
mod my_history;
mod service;

pub use history::AssetHistoryQuery;
pub use service::AllocationQueryService;

mod assign;
mod return_asset;
mod service;
mod transfer;

pub use assign::AssignAssetCommand;
pub use return_asset::ReturnAssetCommand;
pub use service::AllocationCommandService;
pub use transfer::TransferAssetCommand;

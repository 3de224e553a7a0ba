pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Allocation, AssetHistoryEntry, AssetRef, NewAllocation, PartyRef, UserHistoryEntry,
};
pub use repository::AllocationRepository;
pub use value_objects::{AllocationId, AllocationStatus};

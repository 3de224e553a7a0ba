pub mod entity;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{NewUser, User, UserUpdate};
pub use repository::UserRepository;
pub use services::EmployeeIdService;
pub use value_objects::{Capability, Email, EmployeeId, PasswordHash, Role, UserId};

//! User domain: entity, validation policy and repository trait

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{NewUser, User};
pub use repository::UserRepository;
pub use validation::{UserPolicy, UserValidationError};

//! Domain model: entities, validation policies and repository traits

pub mod error;
pub mod tweet;
pub mod user;

pub use error::DomainError;

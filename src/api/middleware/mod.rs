//! Request middleware and extractors

pub mod basic_auth;

pub use basic_auth::RequireUser;
